//! Combatant status renderer
//!
//! One label and one gauge per side; the hero is left-aligned, the enemy
//! right-aligned.

use crate::render::theme;
use crate::turn_system::Match;
use combat::Combatant;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Gauge, Paragraph},
};

pub struct HudRenderer;

impl HudRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, hero_area: Rect, enemy_area: Rect, state: &Match) {
        self.render_status(frame, hero_area, state.hero(), Alignment::Left);
        self.render_status(frame, enemy_area, state.enemy(), Alignment::Right);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, combatant: &Combatant, alignment: Alignment) {
        let [label_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let label = Paragraph::new(health_label(combatant))
            .style(theme::emphasis())
            .alignment(alignment);
        frame.render_widget(label, label_area);

        let ratio = combatant.health_ratio();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme::health_color(ratio)).bg(theme::MUTED))
            .ratio(ratio)
            .label("");
        frame.render_widget(gauge, gauge_area);
    }
}

impl Default for HudRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// `"{name} HP: {health}/{max}"`
pub fn health_label(combatant: &Combatant) -> String {
    format!(
        "{} HP: {}/{}",
        combatant.name(),
        combatant.health(),
        combatant.max_health()
    )
}
