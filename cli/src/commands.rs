pub mod classify;

use clap::{ArgAction, Parser};

/// Exit status for anything rejected at the command line, before classifying.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Parser)]
#[command(name = "sortr", version)]
#[command(about = "Sorts a package into STANDARD, SPECIAL or REJECTED by size and mass.")]
pub struct CommandLine {
    /// Width, height and length in cm, followed by mass in kg
    ///
    /// Hyphenated tokens that are not known flags (`-1`, `-.5`, `-inf`) are values.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub values: Vec<String>,
    /// Show how the category was reached
    #[arg(short, long)]
    pub explain: bool,
    /// More log output, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Less output, repeat to silence warnings too
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    /// Parses the process arguments, exiting on `--help`, `--version` or a usage error.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            if err.use_stderr() {
                let _ = err.print();
                std::process::exit(i32::from(FAILURE_EXIT_CODE));
            }
            err.exit()
        })
    }
}
