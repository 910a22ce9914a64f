//! Screen colors
use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::White;
pub const TEXT: Color = Color::Black;
pub const BUTTON: Color = Color::Gray;
pub const HEALTHY: Color = Color::Green;
pub const WOUNDED: Color = Color::Yellow;
pub const CRITICAL: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BACKGROUND)
}

pub fn emphasis() -> Style {
    base().add_modifier(Modifier::BOLD)
}

/// Gauge color by remaining health
pub fn health_color(ratio: f64) -> Color {
    if ratio > 0.5 {
        HEALTHY
    } else if ratio > 0.2 {
        WOUNDED
    } else {
        CRITICAL
    }
}
