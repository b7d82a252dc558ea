//! Rock Drift entry point
//!
//! Loads settings, opens the terminal backend and runs the tick loop.
//! Exits non-zero on any startup failure.

use std::process::ExitCode;

use rock_drift::platform::Platform;
use rock_drift::platform::terminal::TerminalPlatform;
use rock_drift::{App, AsteroidsError, Settings};

const TITLE: &str = "Asteroids";

fn run() -> Result<(), AsteroidsError> {
    let settings = Settings::load()?;
    let mut platform =
        TerminalPlatform::open(TITLE, settings.bounds(), settings.input.release_hold_ms)?;
    let mut app = App::new(settings, platform.monotonic_ms())?;
    app.run(&mut platform)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rock Drift starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("rock-drift: {e}");
            ExitCode::FAILURE
        }
    }
}
