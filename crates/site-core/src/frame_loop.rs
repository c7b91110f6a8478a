use std::cell::Cell;
use std::rc::Rc;

/// Cancellation token for a self re-arming render loop.
///
/// The loop checks the token before painting and again before requesting the
/// next frame. Clones share one flag; cancelling is permanent.
#[derive(Clone, Debug, Default)]
pub struct LoopToken {
    cancelled: Rc<Cell<bool>>,
}

impl LoopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    #[inline]
    pub fn should_rearm(&self) -> bool {
        !self.is_cancelled()
    }
}

/// Result of one frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame painted; request the next one.
    Continue,
    /// Loop was cancelled; do not re-arm.
    Stopped,
}

/// Whether a `pagehide` should release the loop. A persisted page went into
/// the back/forward cache and keeps animating when it is shown again.
#[inline]
pub fn releases_on_pagehide(persisted: bool) -> bool {
    !persisted
}
