use crate::Turns;

/// Running game-length statistics over a simulation.
///
/// The first absorbed game seeds both extremes; later games widen them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lengths {
    games: usize,
    total: Turns,
    shortest: Turns,
    longest: Turns,
}

impl Lengths {
    pub fn absorb(&mut self, turns: Turns) {
        if self.games == 0 {
            self.shortest = turns;
            self.longest = turns;
        } else {
            self.shortest = self.shortest.min(turns);
            self.longest = self.longest.max(turns);
        }
        self.total += turns;
        self.games += 1;
    }
    pub fn games(&self) -> usize {
        self.games
    }
    pub fn total(&self) -> Turns {
        self.total
    }
    pub fn shortest(&self) -> Turns {
        self.shortest
    }
    pub fn longest(&self) -> Turns {
        self.longest
    }
    /// Mean turns per game. Zero before any game.
    pub fn average(&self) -> f64 {
        match self.games {
            0 => 0.0,
            n => self.total as f64 / n as f64,
        }
    }
}

impl FromIterator<Turns> for Lengths {
    fn from_iter<I: IntoIterator<Item = Turns>>(iter: I) -> Self {
        let mut lengths = Self::default();
        iter.into_iter().for_each(|turns| lengths.absorb(turns));
        lengths
    }
}
