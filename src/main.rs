use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use scopeguard::defer;
use std::io;
use tracing::{info, warn};

use terminal_duel::{
    BattleConfig, GameLoop, Match, Side, TurnController,
    input::ConsoleInput,
    logging,
    renderer::{GameClock, RatatuiRenderer},
};

fn main() -> Result<()> {
    let config = BattleConfig::from_env();
    let _log_guard = logging::init(&config.log_dir)?;
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let state = Match::standard().map_err(|e| setup_failure(&e))?;

    let rng = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            Pcg32::seed_from_u64(seed)
        }
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    let outcome = run_session(&config, TurnController::new(state, rng, config.enemy_delay))
        .inspect_err(|e| tracing::error!("battle crashed: {:#}", e))
        .context("Battle crashed")?;

    match outcome {
        Some(Side::Hero) => println!("The Hero is victorious!"),
        Some(Side::Enemy) => println!("The Hero has fallen..."),
        None => println!("Battle abandoned."),
    }

    Ok(())
}

/// The player-facing message is the whole error; anyhow prints it once on exit
fn setup_failure(error: &error::BattleError) -> anyhow::Error {
    anyhow::anyhow!(error::handle_error(error))
}

/// Own the terminal for the length of one battle; it is restored on every
/// exit path, panics included
fn run_session(config: &BattleConfig, controller: TurnController<Pcg32>) -> Result<Option<Side>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    defer! {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
        .context("Failed to enter alternate screen")?;

    let renderer = RatatuiRenderer::console()?;
    let mut game = GameLoop::new(
        controller,
        renderer,
        ConsoleInput::new(),
        GameClock::new(config.fps),
    )
    .exit_after(config.exit_after);

    game.run()
}
