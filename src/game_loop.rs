//! Game loop: input, turn controller, render, pace.
//!
//! Every iteration drains pending input, lets the turn controller fire any
//! due enemy attack, draws one frame and then sleeps for the rest of the
//! tick. Nothing in the loop blocks on the enemy's presentation delay.

use crate::input::{Command, InputSource, to_command};
use crate::renderer::{Clock, Renderer};
use crate::turn_system::{Side, TurnController};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main loop owning the match and its collaborators
pub struct GameLoop<R: Renderer, I: InputSource, C: Clock, G: Rng> {
    pub controller: TurnController<G>,
    pub renderer: R,
    pub input_source: I,
    pub clock: C,
    exit_after: Option<Duration>,
    finished_at: Option<Instant>,
}

impl<R: Renderer, I: InputSource, C: Clock, G: Rng> GameLoop<R, I, C, G> {
    pub fn new(controller: TurnController<G>, renderer: R, input_source: I, clock: C) -> Self {
        Self {
            controller,
            renderer,
            input_source,
            clock,
            exit_after: None,
            finished_at: None,
        }
    }

    /// Leave on its own this long after the match is decided
    pub fn exit_after(mut self, delay: Option<Duration>) -> Self {
        self.exit_after = delay;
        self
    }

    /// Run until the player quits or the post-match pause elapses.
    ///
    /// Returns the winner, or `None` when the player left mid-match.
    pub fn run(&mut self) -> anyhow::Result<Option<Side>> {
        self.renderer.init()?;
        self.renderer.draw(self.controller.state())?;

        loop {
            let frame_start = self.clock.now();
            if self.step()? == Flow::Quit {
                break;
            }
            let spent = self.clock.now().saturating_duration_since(frame_start);
            self.clock.sleep(self.clock.tick_rate().saturating_sub(spent));
        }

        self.renderer.cleanup()?;
        Ok(self.controller.state().outcome())
    }

    /// One iteration: handle input, advance timers, draw.
    pub fn step(&mut self) -> anyhow::Result<Flow> {
        while let Some(event) = self.input_source.poll(Duration::ZERO)? {
            match to_command(&event, self.renderer.attack_control()) {
                Some(Command::Quit) => {
                    info!("quit requested");
                    return Ok(Flow::Quit);
                }
                Some(Command::Attack) => {
                    let now = self.clock.now();
                    if let Some(report) = self.controller.hero_attack(now) {
                        debug!(damage = report.damage, decisive = report.decisive, "hero attacked");
                    }
                }
                Some(Command::Resize(width, height)) => self.renderer.resize(width, height)?,
                None => {}
            }
        }

        let now = self.clock.now();
        if let Some(report) = self.controller.update(now) {
            debug!(damage = report.damage, decisive = report.decisive, "enemy attacked");
        }

        self.renderer.draw(self.controller.state())?;

        if self.controller.state().is_over() {
            let finished_at = *self.finished_at.get_or_insert(now);
            if let Some(delay) = self.exit_after {
                if now.saturating_duration_since(finished_at) >= delay {
                    info!("leaving after finished match");
                    return Ok(Flow::Quit);
                }
            }
        }

        Ok(Flow::Continue)
    }
}
