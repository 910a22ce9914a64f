//! Battle screen layout.
//!
//! ```text
//! | Hero HP: 100/100                  Enemy HP: 100/100 |
//! | ==========                               ========== |
//! | Hero's turn                                         |
//! | Battle Start!                                       |
//! | -- Battle log ------------------------------------- |
//! |                    [ Attack ]                       |
//! | Enter/click: attack  q: quit                        |
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub const ATTACK_BUTTON_WIDTH: u16 = 12;
pub const ATTACK_BUTTON_HEIGHT: u16 = 3;

/// Screen regions, computed from the frame area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleLayout {
    pub hero_status: Rect,
    pub enemy_status: Rect,
    pub turn: Rect,
    pub log: Rect,
    pub history: Rect,
    pub attack_button: Rect,
    pub hint: Rect,
}

impl BattleLayout {
    pub fn compute(area: Rect) -> Self {
        let [_, status, _, turn, log, history, button_row, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(ATTACK_BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .horizontal_margin(2)
        .areas(area);

        let [hero_status, _, enemy_status] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(status);

        let [_, attack_button, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(ATTACK_BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(button_row);

        Self {
            hero_status,
            enemy_status,
            turn,
            log,
            history,
            attack_button,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_centered_near_the_bottom() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = BattleLayout::compute(area);

        assert_eq!(layout.attack_button.width, ATTACK_BUTTON_WIDTH);
        assert_eq!(layout.attack_button.height, ATTACK_BUTTON_HEIGHT);
        assert_eq!(layout.attack_button.y, 24 - 1 - ATTACK_BUTTON_HEIGHT);
        let left = layout.attack_button.x;
        let right = area.width - (left + layout.attack_button.width);
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn status_panels_sit_side_by_side() {
        let layout = BattleLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.hero_status.y, layout.enemy_status.y);
        assert!(layout.hero_status.right() < layout.enemy_status.x);
        assert_eq!(layout.hero_status.x, 2);
        assert_eq!(layout.enemy_status.right(), 78);
    }

    #[test]
    fn regions_do_not_overlap_vertically() {
        let layout = BattleLayout::compute(Rect::new(0, 0, 80, 24));
        assert!(layout.hero_status.bottom() <= layout.turn.y);
        assert!(layout.turn.bottom() <= layout.log.y);
        assert!(layout.log.bottom() <= layout.history.y);
        assert!(layout.history.bottom() <= layout.attack_button.y);
        assert!(layout.attack_button.bottom() <= layout.hint.y);
    }
}
