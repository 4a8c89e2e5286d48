use crate::*;

/// How many players sit down and how many games they play.
///
/// Validation happens here, before any game runs. A [`Simulation`] can
/// only be built from a configuration that passes [`validate`](Self::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub players: usize,
    pub games: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            games: DEFAULT_GAMES,
        }
    }
}

impl Config {
    /// Builds a validated configuration.
    pub fn new(players: usize, games: usize) -> anyhow::Result<Self> {
        let config = Self { players, games };
        config.validate()?;
        Ok(config)
    }
    /// Rejects fewer than two players or zero games.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.players >= MIN_PLAYERS,
            "Must have at least two players (got {})",
            self.players
        );
        anyhow::ensure!(
            self.games >= MIN_GAMES,
            "Must play at least one game per simulation (got {})",
            self.games
        );
        Ok(())
    }
}

impl TryFrom<(usize, usize)> for Config {
    type Error = anyhow::Error;
    fn try_from((players, games): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(players, games)
    }
}

/// Parses and validates a JSON object such as `{"players": 4, "games": 1000}`.
impl TryFrom<&str> for Config {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let config = serde_json::from_str::<Self>(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} players x {} games", self.players, self.games)
    }
}
