use crossterm::style::Color;

/// Design tokens for the pujan CLI.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const STAR: &str = "★";
    pub const CART: &str = "🛒";
    pub const BULLET: &str = "•";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const STAR: &str = "*";
    pub const CART: &str = "[cart]";
    pub const BULLET: &str = "-";
}

/// Currency prefix for prices
pub const RUPEE: &str = "₹";
pub const RUPEE_ASCII: &str = "Rs.";
