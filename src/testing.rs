use crate::Chance;
use crate::Position;
use std::collections::VecDeque;

/// Face indices as the die maps them.
pub const DOT: usize = 0;
pub const LEFT: usize = 3;
pub const CENTER: usize = 4;
pub const RIGHT: usize = 5;

/// Replays a fixed sequence of seat picks and faces.
pub struct Script {
    seats: VecDeque<Position>,
    faces: VecDeque<usize>,
}

impl Script {
    pub fn new(seats: &[Position], faces: &[usize]) -> Self {
        Self {
            seats: seats.iter().copied().collect(),
            faces: faces.iter().copied().collect(),
        }
    }
    pub fn is_spent(&self) -> bool {
        self.seats.is_empty() && self.faces.is_empty()
    }
}

impl Chance for Script {
    fn face(&mut self) -> usize {
        self.faces.pop_front().expect("script ran out of faces")
    }
    fn seat(&mut self, n: usize) -> Position {
        let seat = self.seats.pop_front().expect("script ran out of seats");
        assert!(seat < n);
        seat
    }
}
