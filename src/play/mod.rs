//! Seats, turn order, and the single-game engine.
mod game;
mod player;
mod rotation;

pub use game::*;
pub use player::*;
pub use rotation::*;
