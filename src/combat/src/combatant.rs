// src/combat/src/combatant.rs

use error::{BattleError, Result};
use std::ops::RangeInclusive;

/// Inclusive bounds an attack's damage is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRange {
    lower: u32,
    upper: u32,
}

impl DamageRange {
    /// Fails with `InvalidConfiguration` when `lower > upper`
    pub fn new(lower: u32, upper: u32) -> Result<Self> {
        if lower > upper {
            return Err(BattleError::invalid_configuration(format!(
                "damage range lower bound {} exceeds upper bound {}",
                lower, upper
            )));
        }
        Ok(Self { lower, upper })
    }

    /// A range that always yields the same damage
    pub fn fixed(damage: u32) -> Self {
        Self {
            lower: damage,
            upper: damage,
        }
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    pub fn contains(&self, damage: u32) -> bool {
        self.as_range().contains(&damage)
    }

    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.lower..=self.upper
    }
}

/// A living participant of a match
///
/// `health` stays within `0..=max_health` for the whole match: damage
/// saturates at zero and nothing heals past the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    health: u32,
    max_health: u32,
    damage_range: DamageRange,
}

impl Combatant {
    /// Create a combatant at full health
    ///
    /// Fails with `InvalidConfiguration` when `max_health` is zero.
    pub fn new(name: impl Into<String>, max_health: u32, damage_range: DamageRange) -> Result<Self> {
        let name = name.into();
        if max_health == 0 {
            return Err(BattleError::invalid_configuration(format!(
                "{} must start with positive max health",
                name
            )));
        }
        Ok(Self {
            name,
            health: max_health,
            max_health,
            damage_range,
        })
    }

    /// Same as [`Combatant::new`] but starting below full health
    pub fn with_health(
        name: impl Into<String>,
        health: u32,
        max_health: u32,
        damage_range: DamageRange,
    ) -> Result<Self> {
        let mut combatant = Self::new(name, max_health, damage_range)?;
        if health > max_health {
            return Err(BattleError::invalid_configuration(format!(
                "{} health {} exceeds max health {}",
                combatant.name, health, max_health
            )));
        }
        combatant.health = health;
        Ok(combatant)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn damage_range(&self) -> DamageRange {
        self.damage_range
    }

    /// Health as a fraction of max health, for gauges
    pub fn health_ratio(&self) -> f64 {
        f64::from(self.health) / f64::from(self.max_health)
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract damage, clamping at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}
