use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const STANDARD: Color = Color::Green;
pub const SPECIAL: Color = Color::Yellow;
pub const REJECTED: Color = Color::Red;
