use super::config::Config;
use super::interrupt::Interrupt;
use super::lengths::Lengths;
use super::summary::Summary;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Runs a batch of games under one configuration.
///
/// Owns the players, the die, and the single [`Chance`] source that both
/// die rolls and starting-seat draws come from. Every call to
/// [`run`](Self::run) seats fresh players, plays the configured number of
/// games back to back, and folds each [`Record`] into a [`Summary`].
///
/// `run` takes `&mut self`, so overlapping runs over the same players
/// cannot happen. Each simulation owns its [`Interrupt`]; requesting it
/// only cuts short the run in progress.
#[derive(Debug)]
pub struct Simulation<C: Chance = SmallRng> {
    config: Config,
    chance: C,
    die: Die,
    players: Vec<Player>,
    interrupt: Interrupt,
}

impl Simulation<SmallRng> {
    /// Simulation seeded from the thread-local entropy source.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_chance(config, SmallRng::from_rng(&mut rand::rng()))
    }
    /// Reproducible simulation: same seed, same summary.
    pub fn seeded(config: Config, seed: u64) -> anyhow::Result<Self> {
        Self::with_chance(config, SmallRng::seed_from_u64(seed))
    }
}

impl<C: Chance> Simulation<C> {
    /// Simulation drawing from the given source. Rejects invalid configuration.
    pub fn with_chance(config: Config, chance: C) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            chance,
            die: Die::new(),
            players: Self::seats(config.players),
            interrupt: Interrupt::default(),
        })
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Players with their win counts from the latest run.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// The die, showing its most recent face.
    pub fn die(&self) -> &Die {
        &self.die
    }
    /// Handle that stops the current run after the game in progress.
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }
    /// Plays every configured game and returns the aggregate.
    ///
    /// Stops early, between games, if an interrupt was requested. At least
    /// one game is always played. The interrupt is cleared on return, so
    /// the next run plays in full unless asked to stop again.
    pub fn run(&mut self) -> Summary {
        log::info!("simulating {}", self.config);
        self.players = Self::seats(self.config.players);
        let ref mut lengths = Lengths::default();
        let start = std::time::Instant::now();
        let mut checkpoint = start;
        for game in 0..self.config.games {
            if game > 0 && self.interrupt.is_requested() {
                log::warn!("interrupted after {} of {} games", game, self.config.games);
                break;
            }
            let record = self.play();
            lengths.absorb(record.turns);
            self.players[record.winner].record_win();
            log::debug!("game {:>8} {}", game + 1, record);
            if checkpoint.elapsed() >= PROGRESS_LOG_INTERVAL {
                checkpoint = std::time::Instant::now();
                log::info!(
                    "{:<20}{:<20}{:<20}",
                    format!("games {}", lengths.games()),
                    format!("turns {}", lengths.total()),
                    format!("G/sec {:.1}", lengths.games() as f64 / start.elapsed().as_secs_f64()),
                );
            }
        }
        self.interrupt.clear();
        let summary = Summary::from((self.players.as_slice(), *lengths));
        log::info!(
            "{} games in {:.2?}: shortest {} longest {} average {:.2}",
            summary.games,
            start.elapsed(),
            summary.shortest,
            summary.longest,
            summary.average,
        );
        summary
    }
    /// Plays a single game over the current players, without tallying it.
    pub fn play(&mut self) -> Record {
        Game::new(&mut self.players, &mut self.die, &mut self.chance, STAKE).play()
    }

    fn seats(n: usize) -> Vec<Player> {
        (0..n).map(Player::from).collect()
    }
}
