//! Batch runner and the statistics it folds games into.
mod config;
mod interrupt;
mod lengths;
mod runner;
mod summary;

pub use config::*;
pub use interrupt::*;
pub use lengths::*;
pub use runner::*;
pub use summary::*;
