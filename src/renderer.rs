//! Ratatui renderer and frame clock for the battle screen.

use crate::render::{AttackButtonRenderer, BattleLayout, BattleLogRenderer, HudRenderer, theme};
use crate::turn_system::Match;
use anyhow::Context;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    widgets::Block,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Trait for rendering the match
pub trait Renderer {
    /// Initialize the renderer
    fn init(&mut self) -> anyhow::Result<()>;

    /// Draw one frame of the current match
    fn draw(&mut self, state: &Match) -> anyhow::Result<()>;

    /// Attack control as drawn in the last frame, if it was shown
    fn attack_control(&self) -> Option<Rect>;

    /// Handle terminal resize
    fn resize(&mut self, width: u16, height: u16) -> anyhow::Result<()>;

    /// Cleanup resources
    fn cleanup(&mut self) -> anyhow::Result<()>;
}

/// Trait for time management
pub trait Clock {
    /// Get the current time
    fn now(&self) -> Instant;

    /// Sleep for duration
    fn sleep(&self, duration: Duration);

    /// Target duration of one frame
    fn tick_rate(&self) -> Duration;
}

/// Ratatui renderer implementation
pub struct RatatuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    hud_renderer: HudRenderer,
    log_renderer: BattleLogRenderer,
    button_renderer: AttackButtonRenderer,
    attack_control: Option<Rect>,
}

impl RatatuiRenderer<CrosstermBackend<Stdout>> {
    /// Renderer drawing to stdout
    pub fn console() -> anyhow::Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()))
    }
}

impl<B: Backend> RatatuiRenderer<B> {
    pub fn new(backend: B) -> anyhow::Result<Self> {
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            hud_renderer: HudRenderer::new(),
            log_renderer: BattleLogRenderer::new(),
            button_renderer: AttackButtonRenderer::new(),
            attack_control: None,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for RatatuiRenderer<B> {
    fn init(&mut self) -> anyhow::Result<()> {
        self.terminal.clear().context("Failed to clear terminal")?;
        self.terminal.hide_cursor().context("Failed to hide cursor")?;
        Ok(())
    }

    fn draw(&mut self, state: &Match) -> anyhow::Result<()> {
        let mut attack_control = None;

        self.terminal
            .draw(|f| {
                let area = f.area();
                let layout = BattleLayout::compute(area);

                f.render_widget(Block::default().style(theme::base()), area);

                self.hud_renderer
                    .render(f, layout.hero_status, layout.enemy_status, state);
                self.log_renderer.render_turn(f, layout.turn, state);
                self.log_renderer.render_log(f, layout.log, state);
                self.log_renderer.render_history(f, layout.history, state);
                self.log_renderer.render_hint(f, layout.hint, state);

                // Only offered while the hero may act
                if state.accepts_attack() {
                    self.button_renderer.render(f, layout.attack_button);
                    attack_control = Some(layout.attack_button);
                }
            })
            .context("Failed to draw frame")?;

        self.attack_control = attack_control;
        Ok(())
    }

    fn attack_control(&self) -> Option<Rect> {
        self.attack_control
    }

    fn resize(&mut self, _width: u16, _height: u16) -> anyhow::Result<()> {
        // Stale until the next frame is drawn
        self.attack_control = None;
        self.terminal
            .autoresize()
            .context("Failed to resize terminal")?;
        Ok(())
    }

    fn cleanup(&mut self) -> anyhow::Result<()> {
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Clock implementation for frame pacing
pub struct GameClock {
    tick_rate: Duration,
}

impl GameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            tick_rate: Duration::from_secs(1) / fps.max(1),
        }
    }
}

impl Clock for GameClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn_system::{Match, TurnController};
    use combat::{Combatant, DamageRange};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use ratatui::backend::TestBackend;

    fn screen(renderer: &RatatuiRenderer<TestBackend>) -> String {
        let buffer = renderer.terminal().backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn renderer() -> RatatuiRenderer<TestBackend> {
        RatatuiRenderer::new(TestBackend::new(80, 24)).unwrap()
    }

    #[test]
    fn opening_frame_shows_both_sides_and_the_button() {
        let mut renderer = renderer();
        let state = Match::standard().unwrap();

        renderer.draw(&state).unwrap();
        let text = screen(&renderer);

        assert!(text.contains("Hero HP: 100/100"));
        assert!(text.contains("Enemy HP: 100/100"));
        assert!(text.contains("Battle Start!"));
        assert!(text.contains("Attack"));
        assert!(renderer.attack_control().is_some());
    }

    #[test]
    fn enemy_label_is_right_aligned() {
        let mut renderer = renderer();
        renderer.draw(&Match::standard().unwrap()).unwrap();

        let text = screen(&renderer);
        let first_label_row = text.lines().nth(1).unwrap();
        assert!(first_label_row.trim_end().ends_with("Enemy HP: 100/100"));
        assert!(first_label_row.starts_with("  Hero HP: 100/100"));
    }

    #[test]
    fn button_hidden_on_enemy_turn() {
        let mut renderer = renderer();
        let mut controller = TurnController::new(
            Match::standard().unwrap(),
            Pcg32::seed_from_u64(9),
            Duration::from_millis(500),
        );
        controller.hero_attack(Instant::now());

        renderer.draw(controller.state()).unwrap();

        assert_eq!(renderer.attack_control(), None);
        assert!(screen(&renderer).contains("Enemy is preparing to attack..."));
    }

    #[test]
    fn final_frame_shows_victory_without_button() {
        let hero = Combatant::new("Hero", 100, DamageRange::fixed(20)).unwrap();
        let enemy = Combatant::with_health("Enemy", 10, 100, DamageRange::fixed(10)).unwrap();
        let mut controller = TurnController::new(
            Match::new(hero, enemy),
            Pcg32::seed_from_u64(9),
            Duration::from_millis(500),
        );
        controller.hero_attack(Instant::now());

        let mut renderer = renderer();
        renderer.draw(controller.state()).unwrap();
        let text = screen(&renderer);

        assert!(text.contains("Enemy HP: 0/100"));
        assert!(text.contains("Enemy is defeated! Hero wins!"));
        assert!(text.contains("Victory!"));
        assert!(text.contains("Press q to quit"));
        assert_eq!(renderer.attack_control(), None);
    }

    #[test]
    fn resize_clears_attack_control_until_next_draw() {
        let mut renderer = renderer();
        let state = Match::standard().unwrap();
        renderer.draw(&state).unwrap();
        assert!(renderer.attack_control().is_some());

        renderer.resize(80, 24).unwrap();
        assert_eq!(renderer.attack_control(), None);

        renderer.draw(&state).unwrap();
        assert!(renderer.attack_control().is_some());
    }

    #[test]
    fn clock_tick_follows_fps() {
        assert_eq!(GameClock::new(20).tick_rate(), Duration::from_millis(50));
        assert_eq!(GameClock::new(0).tick_rate(), Duration::from_secs(1));
    }
}
