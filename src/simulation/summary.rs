use super::lengths::Lengths;
use crate::*;

/// A player's final tally after a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Standing {
    pub seat: Position,
    pub wins: usize,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            seat: player.seat(),
            wins: player.wins(),
        }
    }
}

/// The result of a simulation, as plain data for whoever displays it.
///
/// # Fields
///
/// - `players` — Final win counts in seat order
/// - `games` — Games actually played (fewer than configured if interrupted)
/// - `shortest` — Fewest turns taken by any game
/// - `longest` — Most turns taken by any game
/// - `average` — Mean turns per game
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub players: Vec<Standing>,
    pub games: usize,
    pub shortest: Turns,
    pub longest: Turns,
    pub average: f64,
}

impl From<(&[Player], Lengths)> for Summary {
    fn from((players, lengths): (&[Player], Lengths)) -> Self {
        Self {
            players: players.iter().map(Standing::from).collect(),
            games: lengths.games(),
            shortest: lengths.shortest(),
            longest: lengths.longest(),
            average: lengths.average(),
        }
    }
}

impl Summary {
    /// Wins across all players. Equals `games`.
    pub fn wins(&self) -> usize {
        self.players.iter().map(|s| s.wins).sum()
    }
    /// Share of games won by a seat.
    pub fn win_rate(&self, seat: Position) -> f64 {
        match self.games {
            0 => 0.0,
            n => self.players.get(seat).map_or(0, |s| s.wins) as f64 / n as f64,
        }
    }
    /// The seat with the most wins, lowest seat on ties.
    pub fn leader(&self) -> Option<&Standing> {
        self.players
            .iter()
            .rev()
            .max_by_key(|s| s.wins)
    }
}

/// Text layout shared by every rendering of a summary.
impl Summary {
    /// Column titles aligned with [`row`](Self::row).
    pub fn header() -> String {
        format!("{:<8}{:>8}{:>10}", "PLAYER", "WINS", "RATE")
    }
    /// One seat's wins and win rate.
    pub fn row(&self, standing: &Standing) -> String {
        format!(
            "{:<8}{:>8}{:>9.1}%",
            format!("P{}", standing.seat),
            standing.wins,
            100.0 * self.win_rate(standing.seat),
        )
    }
    /// Labelled game-length figures: games, shortest, longest, average.
    pub fn totals(&self) -> [(&'static str, String); 4] {
        [
            ("games", self.games.to_string()),
            ("shortest", self.shortest.to_string()),
            ("longest", self.longest.to_string()),
            ("average", format!("{:.2}", self.average)),
        ]
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", Self::header())?;
        for standing in self.players.iter() {
            writeln!(f, "{}", self.row(standing))?;
        }
        for (label, value) in self.totals() {
            write!(f, "\n{:<10}{}", label, value)?;
        }
        Ok(())
    }
}
