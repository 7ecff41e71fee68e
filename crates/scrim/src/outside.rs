//! Outside-click dismissal.
//!
//! A genuine outside click is a press and release on the same non-content
//! region. Tracking the pointer-down target means a drag that starts on the
//! backdrop and releases over content (or the reverse) never dismisses the
//! dialog.

use crate::config::Region;

/// Two-phase outside-click detector.
#[derive(Debug, Default)]
pub struct OutsideClickDetector {
    /// Region remembered from the last qualifying pointer-down; lives only
    /// until the next pointer-up is evaluated.
    pending: Option<Region>,
}

impl OutsideClickDetector {
    /// Create a detector with no pending press.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-down. Only the backdrop and wrapper regions qualify
    /// as "outside" targets; a press anywhere else clears any pending state.
    pub fn pointer_down(&mut self, enabled: bool, target: Region) {
        self.pending = match target {
            Region::Background | Region::Wrapper if enabled => Some(target),
            _ => None,
        };
    }

    /// Evaluate a pointer-up. Returns `true` when this completes a genuine
    /// outside click: dismissal enabled, and the release landed on the same
    /// region the press did.
    pub fn pointer_up(&mut self, enabled: bool, target: Region) -> bool {
        let pending = self.pending.take();
        enabled && pending == Some(target)
    }

    /// Forget any pending press, e.g. when the session ends mid-drag.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
