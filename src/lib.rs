//! Monte Carlo simulation of the Left-Center-Right dice game.
//!
//! Players sit in a circle holding chips. On each turn the acting player
//! rolls one die per chip held (never more than [`STAKE`]) and every face
//! either passes a chip left, passes a chip right, drops a chip in the
//! center pot, or does nothing. The last player holding chips wins.
//!
//! ## Core Types
//!
//! - [`Outcome`] — What a rolled face tells the player to do
//! - [`Die`] — Six-sided die rolled through a [`Chance`] source
//! - [`Player`] — A seat at the table with chips and accumulated wins
//! - [`Game`] — One game session from stake distribution to a single survivor
//! - [`Simulation`] — Batch runner folding many games into a [`Summary`]

pub mod dice;
pub mod play;
pub mod simulation;

#[cfg(test)]
mod testing;

pub use dice::*;
pub use play::*;
pub use simulation::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chips held by a player.
pub type Chips = u16;
/// Seat index around the table; defines circular turn order.
pub type Position = usize;
/// Number of turns taken in a game.
pub type Turns = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Chips dealt to every player at the start of each game.
/// Also caps the number of dice rolled per turn.
pub const STAKE: Chips = 3;
/// Number of faces on the die.
pub const FACES: usize = 6;
/// Fewest players a game can be played with.
pub const MIN_PLAYERS: usize = 2;
/// Fewest games a simulation can run.
pub const MIN_GAMES: usize = 1;
/// Player count used when none is configured.
pub const DEFAULT_PLAYERS: usize = 3;
/// Game count used when none is configured.
pub const DEFAULT_GAMES: usize = 100;
/// Interval between progress log messages during long simulations.
pub const PROGRESS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// TRAITS
// ============================================================================
/// Source of randomness shared by die rolls and starting seat selection.
///
/// Every random draw in a simulation flows through a single `Chance`
/// instance, so a seeded implementation makes whole simulations
/// reproducible.
pub trait Chance {
    /// Uniform face index in `0..FACES`.
    fn face(&mut self) -> usize;
    /// Uniform seat index in `0..n`.
    fn seat(&mut self, n: usize) -> Position;
}

impl Chance for rand::rngs::SmallRng {
    fn face(&mut self) -> usize {
        rand::Rng::random_range(self, 0..FACES)
    }
    fn seat(&mut self, n: usize) -> Position {
        rand::Rng::random_range(self, 0..n)
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging for a simulation run.
///
/// Every game record lands in `logs/lcr-<unix seconds>.log` at DEBUG.
/// Progress and interrupts go to stderr at INFO, so stdout carries only
/// the summary (plain or JSON). Records from other crates are dropped.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_format_rfc3339()
        .add_filter_allow_str("lcr")
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = format!("logs/lcr-{}.log", time);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path)?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    log::debug!("logging games to {}", path);
    Ok(())
}

/// Watch stdin for "Q" + Enter and request `interrupt` when it arrives.
/// The running simulation stops after the game in progress.
#[cfg(feature = "server")]
pub fn brb(interrupt: Interrupt) {
    std::thread::spawn(move || {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current game...");
                    interrupt.request();
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
