//! Battle error handling.
//!
//! Errors that can surface while setting up a duel. Terminal failures are
//! reported by the binary through `anyhow` instead.

use thiserror::Error;

/// Errors raised while building a battle
#[derive(Debug, Error)]
pub enum BattleError {
    /// Combatant or damage-range parameters that cannot describe a valid match
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl BattleError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        BattleError::InvalidConfiguration(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;

/// Turn a battle error into a message fit for the player
pub fn handle_error(error: &BattleError) -> String {
    match error {
        BattleError::InvalidConfiguration(reason) => {
            format!("The battle could not be set up: {}", reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_message_names_the_reason() {
        let err = BattleError::invalid_configuration("max health must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max health must be positive"
        );
        assert_eq!(
            handle_error(&err),
            "The battle could not be set up: max health must be positive"
        );
    }
}
