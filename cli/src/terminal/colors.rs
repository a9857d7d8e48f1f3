use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::TrueColor { r: 83, g: 179, b: 203 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 192, b: 192 };

pub const SUCCESS: Color = Color::Green;
pub const FAILURE: Color = Color::Red;
pub const DENIED: Color = Color::Yellow;
