use crate::Chips;
use crate::Position;

/// A player's state at the table.
///
/// The seat never changes once created and fixes the player's place in
/// turn order. Chips are reset at the start of every game; wins
/// accumulate over a whole simulation.
///
/// # Fields
///
/// - `seat` — Position around the table
/// - `chips` — Chips currently held
/// - `wins` — Games won so far in this simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Player {
    seat: Position,
    chips: Chips,
    wins: usize,
}

impl From<Position> for Player {
    fn from(seat: Position) -> Self {
        Self {
            seat,
            chips: 0,
            wins: 0,
        }
    }
}

impl Player {
    /// Position around the table.
    pub fn seat(&self) -> Position {
        self.seat
    }
    /// Chips currently held.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    /// Games won so far.
    pub fn wins(&self) -> usize {
        self.wins
    }
    /// True if the player still has something to roll with.
    pub fn has_chips(&self) -> bool {
        self.chips > 0
    }
    /// Deals a fresh stack at the start of a game.
    pub fn reset(&mut self, stake: Chips) {
        self.chips = stake;
    }
    /// Passes one chip to another player.
    ///
    /// Giving from an empty stack is a caller bug: it panics in debug
    /// builds and does nothing in release builds.
    pub fn give(&mut self, other: &mut Self) {
        debug_assert!(self.has_chips(), "seat {} has no chip to give", self.seat);
        if self.take() {
            other.chips += 1;
        }
    }
    /// Drops one chip into the center pot.
    ///
    /// Same empty-stack contract as [`give`](Self::give).
    pub fn discard(&mut self) {
        debug_assert!(self.has_chips(), "seat {} has no chip to discard", self.seat);
        self.take();
    }
    /// Credits a game won.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    fn take(&mut self) -> bool {
        match self.chips.checked_sub(1) {
            Some(chips) => {
                self.chips = chips;
                true
            }
            None => false,
        }
    }
}
