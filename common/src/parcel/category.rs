use std::fmt;

/// The handling stack a package is sent to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Neither bulky nor heavy, ships normally.
    Standard,
    /// Bulky or heavy, needs special handling.
    Special,
    /// Bulky and heavy, or not a valid package at all.
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    #[test]
    fn test_category_renders_fixed_names() {
        assert_eq!(Category::Standard.to_string(), "STANDARD");
        assert_eq!(Category::Special.to_string(), "SPECIAL");
        assert_eq!(Category::Rejected.to_string(), "REJECTED");
    }

    #[test]
    fn test_category_names_are_distinct() {
        let names: std::collections::HashSet<&str> = ALL.iter().map(Category::as_str).collect();
        assert_eq!(names.len(), ALL.len());
    }
}
