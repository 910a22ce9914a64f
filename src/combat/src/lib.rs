// src/combat/src/lib.rs
//! Combat model for a two-sided duel.
//!
//! Holds combatants and resolves single attacks. Whose turn it is, and
//! whether an attack may be issued at all, is decided by the caller.

use rand::Rng;
use tracing::debug;

pub mod combatant;

pub use crate::combatant::{Combatant, DamageRange};

/// Handles combat interactions between combatants
pub struct Combat;

impl Combat {
    /// Resolve a single attack and return the damage dealt
    ///
    /// Damage is drawn uniformly from the attacker's inclusive damage range
    /// and subtracted from the defender, whose health never drops below
    /// zero. Only the defender is mutated. Callers must not attack with or
    /// against a defeated combatant.
    pub fn resolve_attack<R: Rng>(
        rng: &mut R,
        attacker: &Combatant,
        defender: &mut Combatant,
    ) -> u32 {
        let damage = rng.random_range(attacker.damage_range().as_range());
        defender.take_damage(damage);

        debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            damage,
            remaining = defender.health(),
            "attack resolved"
        );

        damage
    }

    pub fn is_defeated(combatant: &Combatant) -> bool {
        combatant.is_defeated()
    }
}
