use super::outcome::Outcome;
use crate::Chance;

/// A six-sided die.
///
/// Holds no randomness of its own: every roll draws a face from the
/// caller's [`Chance`] source, so the die and seat selection share one
/// stream. The last outcome is remembered for display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Die {
    last: Option<Outcome>,
}

impl Die {
    pub fn new() -> Self {
        Self::default()
    }
    /// Draws one face uniformly and returns its outcome.
    pub fn roll<C: Chance>(&mut self, chance: &mut C) -> Outcome {
        let outcome = Outcome::from(chance.face());
        self.last = Some(outcome);
        outcome
    }
    /// Outcome of the most recent roll, if any.
    pub fn last(&self) -> Option<Outcome> {
        self.last
    }
}
