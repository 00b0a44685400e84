//! Stopping a running search from outside the search loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

const RUNNING: u8 = 0;
const CANCELLED: u8 = 1;
const QUIT: u8 = 2;

/// Stop flag shared by a search and the front end driving it.
///
/// Searches only look at [`is_done`](Self::is_done), once per iteration.
/// The front end can also ask for the whole session to end with
/// [`quit`](Self::quit), which stops the search the same way and stays
/// readable after it returns. All clones share one state.
#[derive(Clone, Debug, Default)]
pub struct Context {
    state: Arc<AtomicU8>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the search should stop.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.load(Ordering::Acquire) != RUNNING
    }

    /// Stop the search. Does not undo an earlier [`quit`](Self::quit).
    pub fn cancel(&self) {
        let _ = self
            .state
            .compare_exchange(RUNNING, CANCELLED, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Stop the search and flag that the session should end.
    pub fn quit(&self) {
        self.state.store(QUIT, Ordering::Release);
    }

    /// Whether [`quit`](Self::quit) was called on any clone.
    #[inline]
    pub fn wants_quit(&self) -> bool {
        self.state.load(Ordering::Acquire) == QUIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_state() {
        let ctx = Context::new();
        let handle = ctx.clone();
        assert!(!ctx.is_done());
        handle.cancel();
        assert!(ctx.is_done());
        assert!(!ctx.wants_quit());
    }

    #[test]
    fn quit_outranks_cancel() {
        let ctx = Context::new();
        ctx.quit();
        ctx.cancel();
        assert!(ctx.is_done());
        assert!(ctx.wants_quit());

        let ctx = Context::new();
        ctx.cancel();
        ctx.quit();
        assert!(ctx.wants_quit());
    }
}
