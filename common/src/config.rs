pub struct Config {
    /// Prints the measurements and predicates that led to the category.
    ///
    /// Has no effect on the category itself or on what goes to stdout.
    pub explain: bool,
    /// Quiet level. Anything above zero silences the report lines.
    pub quiet: u8,
}

impl Config {
    pub fn shows_report(&self) -> bool {
        self.explain && self.quiet == 0
    }
}
