//! Deterministic stand-ins for the terminal: scripted input and a clock
//! that only moves when told to.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use ratatui::backend::TestBackend;
use terminal_duel::input::{InputEvent, InputSource, KeyCode, KeyEvent, MouseButton, MouseEvent};
use terminal_duel::renderer::{Clock, RatatuiRenderer};
use terminal_duel::{Combatant, DamageRange, GameLoop, Match, TurnController};

pub const ENEMY_DELAY: Duration = Duration::from_millis(500);
pub const TICK: Duration = Duration::from_millis(50);

/// Input source fed from a shared queue
#[derive(Clone, Default)]
pub struct ScriptedInput {
    queue: Rc<RefCell<VecDeque<InputEvent>>>,
    timeouts: Rc<RefCell<Vec<Duration>>>,
}

impl ScriptedInput {
    pub fn push(&self, event: InputEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Timeout passed to every poll so far
    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.borrow().clone()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<InputEvent>> {
        self.timeouts.borrow_mut().push(timeout);
        Ok(self.queue.borrow_mut().pop_front())
    }
}

/// Clock advanced by `sleep` and `advance` only
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }

    fn tick_rate(&self) -> Duration {
        TICK
    }
}

pub type TestGame = GameLoop<RatatuiRenderer<TestBackend>, ScriptedInput, ManualClock, Pcg32>;

pub fn fighter(name: &str, health: u32, damage: u32) -> Combatant {
    Combatant::with_health(name, health, 100, DamageRange::fixed(damage)).unwrap()
}

pub fn game_with(hero: Combatant, enemy: Combatant) -> TestGame {
    let controller = TurnController::new(Match::new(hero, enemy), Pcg32::seed_from_u64(11), ENEMY_DELAY);
    let renderer = RatatuiRenderer::new(TestBackend::new(80, 24)).unwrap();
    GameLoop::new(controller, renderer, ScriptedInput::default(), ManualClock::new())
}

pub fn left_click(column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent::Press(MouseButton::Left, column, row))
}

pub fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::plain(code))
}
