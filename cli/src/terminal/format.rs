use crate::terminal::colors;
use colored::*;
use sortr_common::parcel::{Category, Field};

pub fn category(category: Category) -> ColoredString {
    let color = match category {
        Category::Standard => colors::STANDARD,
        Category::Special => colors::SPECIAL,
        Category::Rejected => colors::REJECTED,
    };
    category.as_str().color(color).bold()
}

pub fn measure(field: Field, value: f64) -> String {
    format!("{value} {}", field.unit())
}

/// Renders a predicate as "yes"/"no" followed by the rule it was checked against.
pub fn verdict(holds: bool, rule: &str) -> String {
    let answer: ColoredString = if holds {
        "yes".color(colors::SPECIAL).bold()
    } else {
        "no".color(colors::STANDARD)
    };
    format!("{} {}", answer, format!("({rule})").color(colors::SEPARATOR))
}
