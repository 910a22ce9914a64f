//! Attack control

use crate::render::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

pub const ATTACK_LABEL: &str = "Attack";

pub struct AttackButtonRenderer;

impl AttackButtonRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let button = Paragraph::new(ATTACK_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::TEXT).bg(theme::BUTTON))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
    }
}

impl Default for AttackButtonRenderer {
    fn default() -> Self {
        Self::new()
    }
}
