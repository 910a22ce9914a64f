//! Two-state turn controller alternating hero and enemy attacks.
//!
//! The `TurnController` owns the `Match` record and the RNG. Hero attacks
//! arrive as commands from the game loop; the enemy answers on its own once
//! a scheduled deadline has passed. The deadline is polled through
//! [`TurnController::update`], so the loop keeps reading input and drawing
//! frames while the enemy "winds up".
//!
//! There is no terminal turn state: once either combatant is defeated
//! `Match::is_over` turns true and every further command is ignored.

use combat::{Combat, Combatant, DamageRange};
use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use strum::Display;
use tracing::{debug, info, trace};

/// Fixed roster of the standard duel.
pub mod roster {
    pub const HERO_NAME: &str = "Hero";
    pub const HERO_MAX_HEALTH: u32 = 100;
    pub const HERO_DAMAGE: (u32, u32) = (15, 25);

    pub const ENEMY_NAME: &str = "Enemy";
    pub const ENEMY_MAX_HEALTH: u32 = 100;
    pub const ENEMY_DAMAGE: (u32, u32) = (10, 20);
}

/// Number of recent log lines kept for the history panel
pub const HISTORY_LEN: usize = 5;

/// Default pause before the enemy strikes back
pub const DEFAULT_ENEMY_DELAY: Duration = Duration::from_millis(500);

/// The two sides of a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Side {
    Hero,
    Enemy,
}

/// Whose attack is currently valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The player may issue the attack command.
    HeroTurn,
    /// The enemy attack is pending until its deadline.
    EnemyTurn,
}

impl TurnState {
    pub fn side(self) -> Side {
        match self {
            TurnState::HeroTurn => Side::Hero,
            TurnState::EnemyTurn => Side::Enemy,
        }
    }
}

/// State of one match, mutated in place until a side falls
#[derive(Debug, Clone)]
pub struct Match {
    hero: Combatant,
    enemy: Combatant,
    active_side: TurnState,
    log_message: String,
    history: VecDeque<String>,
    round: u32,
}

impl Match {
    pub fn new(hero: Combatant, enemy: Combatant) -> Self {
        let mut state = Self {
            hero,
            enemy,
            active_side: TurnState::HeroTurn,
            log_message: String::new(),
            history: VecDeque::with_capacity(HISTORY_LEN),
            round: 0,
        };
        state.set_log("Battle Start!".to_string());
        state
    }

    /// Hero and enemy with the stock roster parameters
    pub fn standard() -> error::Result<Self> {
        let hero = Combatant::new(
            roster::HERO_NAME,
            roster::HERO_MAX_HEALTH,
            DamageRange::new(roster::HERO_DAMAGE.0, roster::HERO_DAMAGE.1)?,
        )?;
        let enemy = Combatant::new(
            roster::ENEMY_NAME,
            roster::ENEMY_MAX_HEALTH,
            DamageRange::new(roster::ENEMY_DAMAGE.0, roster::ENEMY_DAMAGE.1)?,
        )?;
        Ok(Self::new(hero, enemy))
    }

    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn active_side(&self) -> TurnState {
        self.active_side
    }

    /// Description of the last event
    pub fn log_message(&self) -> &str {
        &self.log_message
    }

    /// Recent log lines, oldest first; the last entry equals `log_message`
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Number of hero attacks issued so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_over(&self) -> bool {
        self.hero.is_defeated() || self.enemy.is_defeated()
    }

    /// Winner of a finished match
    pub fn outcome(&self) -> Option<Side> {
        if self.enemy.is_defeated() {
            Some(Side::Hero)
        } else if self.hero.is_defeated() {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    /// True while the attack control should be offered to the player
    pub fn accepts_attack(&self) -> bool {
        self.active_side == TurnState::HeroTurn && !self.is_over()
    }

    fn set_log(&mut self, message: String) {
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(message.clone());
        self.log_message = message;
    }

    /// Replace the last log line without growing the history
    fn amend_log(&mut self, message: String) {
        match self.history.back_mut() {
            Some(last) => *last = message.clone(),
            None => self.history.push_back(message.clone()),
        }
        self.log_message = message;
    }
}

/// Summary of one resolved attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: Side,
    pub damage: u32,
    /// Whether the attack ended the match
    pub decisive: bool,
}

/// Drives a [`Match`] through alternating turns.
pub struct TurnController<R: Rng> {
    state: Match,
    rng: R,
    enemy_delay: Duration,
    /// When the pending enemy attack becomes due
    enemy_due_at: Option<Instant>,
}

impl<R: Rng> TurnController<R> {
    pub fn new(state: Match, rng: R, enemy_delay: Duration) -> Self {
        info!(
            hero = state.hero().name(),
            enemy = state.enemy().name(),
            ?enemy_delay,
            "match started"
        );
        Self {
            state,
            rng,
            enemy_delay,
            enemy_due_at: None,
        }
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn enemy_due_at(&self) -> Option<Instant> {
        self.enemy_due_at
    }

    /// Handle the attack command.
    ///
    /// Only valid in `HeroTurn` while the match is running; otherwise the
    /// command is dropped and nothing changes.
    pub fn hero_attack(&mut self, now: Instant) -> Option<AttackReport> {
        if !self.state.accepts_attack() {
            trace!(
                turn = ?self.state.active_side,
                over = self.state.is_over(),
                "attack command ignored"
            );
            return None;
        }

        self.state.round += 1;
        let damage = Combat::resolve_attack(&mut self.rng, &self.state.hero, &mut self.state.enemy);
        let message = format!(
            "{} attacks! {} takes {} damage.",
            self.state.hero.name(),
            self.state.enemy.name(),
            damage
        );
        self.state.set_log(message);

        let decisive = Combat::is_defeated(&self.state.enemy);
        if decisive {
            let message = format!(
                "{} is defeated! {} wins!",
                self.state.enemy.name(),
                self.state.hero.name()
            );
            self.state.amend_log(message);
            info!(round = self.state.round, winner = %Side::Hero, "match over");
        } else {
            self.state.active_side = TurnState::EnemyTurn;
            self.enemy_due_at = Some(now + self.enemy_delay);
            debug!(round = self.state.round, "enemy turn scheduled");
        }

        Some(AttackReport {
            attacker: Side::Hero,
            damage,
            decisive,
        })
    }

    /// Advance timed transitions; fires the enemy attack once it is due.
    pub fn update(&mut self, now: Instant) -> Option<AttackReport> {
        if self.state.is_over() {
            self.enemy_due_at = None;
            return None;
        }
        match (self.state.active_side, self.enemy_due_at) {
            (TurnState::EnemyTurn, Some(due)) if now >= due => {
                self.enemy_due_at = None;
                Some(self.enemy_attack())
            }
            _ => None,
        }
    }

    fn enemy_attack(&mut self) -> AttackReport {
        let damage = Combat::resolve_attack(&mut self.rng, &self.state.enemy, &mut self.state.hero);
        let message = format!(
            "{} attacks! {} takes {} damage.",
            self.state.enemy.name(),
            self.state.hero.name(),
            damage
        );
        self.state.set_log(message);

        let decisive = Combat::is_defeated(&self.state.hero);
        if decisive {
            let message = format!(
                "{} is defeated! {} wins!",
                self.state.hero.name(),
                self.state.enemy.name()
            );
            self.state.amend_log(message);
            info!(round = self.state.round, winner = %Side::Enemy, "match over");
        } else {
            self.state.active_side = TurnState::HeroTurn;
        }

        AttackReport {
            attacker: Side::Enemy,
            damage,
            decisive,
        }
    }
}
