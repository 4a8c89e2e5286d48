use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Request to stop a running [`Simulation`](super::Simulation) between games.
///
/// Clones share one flag, so a handle can be passed to another thread
/// (see [`brb`](crate::brb)) while the simulation keeps its own. The
/// simulation clears the flag when a run returns.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
