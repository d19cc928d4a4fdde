use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const ADDRESS: Color = Color::BrightCyan;
pub const HOSTNAME: Color = Color::Cyan;
pub const SERVICE: Color = Color::Magenta;

pub const OPEN: Color = Color::Green;
pub const CLOSED: Color = Color::Red;
pub const FILTERED: Color = Color::Yellow;

/// Color for a port or host state as the scanner spells it.
pub fn for_state(state: &str) -> Color {
    match state {
        "open" | "up" => OPEN,
        "closed" | "down" => CLOSED,
        _ => FILTERED,
    }
}
