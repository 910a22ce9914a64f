//! Turn-based terminal duel: a hero and an enemy trade randomized attacks
//! until one of them falls.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod render;
pub mod renderer;
pub mod turn_system;

pub use combat::{Combat, Combatant, DamageRange};
pub use config::BattleConfig;
pub use game_loop::{Flow, GameLoop};
pub use turn_system::{Match, Side, TurnController, TurnState};
