//! Turn indicator, latest log line and recent history

use crate::render::theme;
use crate::turn_system::{Match, Side, TurnState};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub struct BattleLogRenderer;

impl BattleLogRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_turn(&self, frame: &mut Frame, area: Rect, state: &Match) {
        let (text, style) = match state.outcome() {
            Some(Side::Hero) => ("Victory!".to_string(), theme::emphasis().fg(theme::HEALTHY)),
            Some(Side::Enemy) => ("Defeat...".to_string(), theme::emphasis().fg(theme::CRITICAL)),
            None => match state.active_side() {
                TurnState::HeroTurn => (
                    format!("Round {}: {}'s turn", state.round() + 1, state.hero().name()),
                    theme::base(),
                ),
                TurnState::EnemyTurn => (
                    format!("{} is preparing to attack...", state.enemy().name()),
                    theme::base().fg(theme::CRITICAL),
                ),
            },
        };
        frame.render_widget(Paragraph::new(text).style(style), area);
    }

    pub fn render_log(&self, frame: &mut Frame, area: Rect, state: &Match) {
        frame.render_widget(
            Paragraph::new(state.log_message()).style(theme::emphasis()),
            area,
        );
    }

    /// Earlier log lines, newest last; the latest line is already shown above
    pub fn render_history(&self, frame: &mut Frame, area: Rect, state: &Match) {
        let lines: Vec<Line> = state
            .history()
            .collect::<Vec<_>>()
            .iter()
            .rev()
            .skip(1)
            .take(area.height.saturating_sub(1) as usize)
            .rev()
            .map(|line| Line::from(line.to_string()))
            .collect();

        let history = Paragraph::new(lines)
            .style(Style::default().fg(theme::MUTED).bg(theme::BACKGROUND))
            .block(Block::default().title("Battle log").borders(Borders::TOP));
        frame.render_widget(history, area);
    }

    pub fn render_hint(&self, frame: &mut Frame, area: Rect, state: &Match) {
        let hint = if state.is_over() {
            "Press q to quit"
        } else {
            "Click Attack or press Enter  |  q: quit"
        };
        frame.render_widget(
            Paragraph::new(hint).style(theme::base().fg(theme::MUTED)),
            area,
        );
    }
}

impl Default for BattleLogRenderer {
    fn default() -> Self {
        Self::new()
    }
}
