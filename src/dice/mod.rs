//! The die and the outcomes its faces map to.
mod die;
mod outcome;

pub use die::*;
pub use outcome::*;
