use std::fmt;

/// One of the four quantities measured on a package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Width | Field::Height | Field::Length => "cm",
            Field::Mass => "kg",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `value` can stand for a physical measurement.
///
/// Edges and mass share the same rule: the value must be finite and strictly
/// greater than zero. `NaN` fails the finiteness check.
pub fn is_valid_measure(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_measure_accepts_positive_finite() {
        assert!(is_valid_measure(1.0));
        assert!(is_valid_measure(0.001));
        assert!(is_valid_measure(f64::MIN_POSITIVE));
        assert!(is_valid_measure(f64::MAX));
    }

    #[test]
    fn test_is_valid_measure_rejects_out_of_domain() {
        assert!(!is_valid_measure(0.0));
        assert!(!is_valid_measure(-0.0));
        assert!(!is_valid_measure(-5.0));
        assert!(!is_valid_measure(f64::NAN));
        assert!(!is_valid_measure(f64::INFINITY));
        assert!(!is_valid_measure(f64::NEG_INFINITY));
    }

    #[test]
    fn test_field_units() {
        assert_eq!(Field::Width.unit(), "cm");
        assert_eq!(Field::Height.unit(), "cm");
        assert_eq!(Field::Length.unit(), "cm");
        assert_eq!(Field::Mass.unit(), "kg");
        assert_eq!(Field::Length.to_string(), "length");
    }
}
