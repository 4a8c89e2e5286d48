use crate::FACES;

/// What a rolled face instructs the acting player to do.
///
/// Three of the six faces are plain pips with no effect, the remaining
/// three each carry one chip movement. `Dot` is therefore drawn with
/// probability 1/2 and each directional outcome with probability 1/6.
///
/// - `Dot` — Keep the chip
/// - `Left` — Pass a chip to the player seated before
/// - `Center` — Drop a chip into the pot
/// - `Right` — Pass a chip to the player seated after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Dot,
    Left,
    Center,
    Right,
}

impl Outcome {
    /// All outcomes, one per face, in face order.
    pub const fn faces() -> [Self; FACES] {
        [
            Self::Dot,
            Self::Dot,
            Self::Dot,
            Self::Left,
            Self::Center,
            Self::Right,
        ]
    }
}

/// Face index to outcome. Indices wrap modulo [`FACES`].
impl From<usize> for Outcome {
    fn from(face: usize) -> Self {
        Self::faces()[face % FACES]
    }
}

/// Face symbol as printed on the die.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Dot => write!(f, "."),
            Self::Left => write!(f, "L"),
            Self::Center => write!(f, "C"),
            Self::Right => write!(f, "R"),
        }
    }
}
