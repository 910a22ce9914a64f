//! Battle settings read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::turn_system::DEFAULT_ENEMY_DELAY;

pub const DEFAULT_FPS: u32 = 30;

/// Runtime knobs for one battle session.
///
/// Combatant parameters are fixed by the roster; only pacing, seeding and
/// log placement can be tuned.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleConfig {
    /// Seed for reproducible damage rolls; OS entropy when unset
    pub seed: Option<u64>,
    /// Pause between the hero's attack and the enemy's answer
    pub enemy_delay: Duration,
    /// Target frames per second
    pub fps: u32,
    /// Leave this long after the match ends instead of waiting for quit
    pub exit_after: Option<Duration>,
    /// Directory receiving `duel.log`
    pub log_dir: PathBuf,
    /// Values that were present but could not be parsed
    pub warnings: Vec<String>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            enemy_delay: DEFAULT_ENEMY_DELAY,
            fps: DEFAULT_FPS,
            exit_after: None,
            log_dir: default_log_dir(|key| env::var(key).ok()),
            warnings: Vec::new(),
        }
    }
}

impl BattleConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SEED` - RNG seed (default: random)
    /// - `DUEL_ENEMY_DELAY_MS` - enemy attack delay (default: 500)
    /// - `DUEL_FPS` - frame rate (default: 30, minimum 1)
    /// - `DUEL_EXIT_AFTER_MS` - auto-exit delay after the match (default: wait for quit)
    /// - `DUEL_LOG_DIR` - log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            log_dir: default_log_dir(&lookup),
            ..Self::default()
        };
        let mut warnings = Vec::new();

        if let Some(seed) = read::<u64, _>(&lookup, "DUEL_SEED", &mut warnings) {
            config.seed = Some(seed);
        }
        if let Some(ms) = read::<u64, _>(&lookup, "DUEL_ENEMY_DELAY_MS", &mut warnings) {
            config.enemy_delay = Duration::from_millis(ms);
        }
        if let Some(fps) = read::<u32, _>(&lookup, "DUEL_FPS", &mut warnings) {
            config.fps = fps.max(1);
        }
        if let Some(ms) = read::<u64, _>(&lookup, "DUEL_EXIT_AFTER_MS", &mut warnings) {
            config.exit_after = Some(Duration::from_millis(ms));
        }
        if let Some(dir) = lookup("DUEL_LOG_DIR").filter(|dir| !dir.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config.warnings = warnings;
        config
    }
}

fn read<T, F>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring {}={:?}: not a valid number", key, raw));
            None
        }
    }
}

/// Platform-specific log directory
fn default_log_dir<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let base = if cfg!(target_os = "macos") {
        lookup("HOME").map(|home| PathBuf::from(home).join("Library").join("Caches"))
    } else {
        lookup("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| lookup("HOME").map(|home| PathBuf::from(home).join(".cache")))
    };

    base.unwrap_or_else(env::temp_dir)
        .join("terminal-duel")
        .join("logs")
}
