//! Background scroll suppression.
//!
//! While a modal is displayed the document body is pinned in place:
//! `position: fixed` with a negative top offset reproducing the current
//! scroll position, `overflow: hidden`, and full width. The lock records the
//! body's prior inline values exactly once and restores them exactly once,
//! so engage/disengage pairs are safe to nest-request but never stack.

use tracing::trace;

use crate::page::{BodyStyle, Page};

/// Snapshot of body style values and scroll offset taken when the lock
/// engages.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedScrollState {
    /// Inline `position` value before the lock.
    position: Option<String>,
    /// Inline `overflow` value before the lock.
    overflow: Option<String>,
    /// Inline `width` value before the lock.
    width: Option<String>,
    /// Vertical scroll offset before the lock.
    offset: i64,
}

/// The sole writer of body scroll state.
///
/// At most one snapshot is outstanding at a time: engaging while already
/// engaged is a no-op, so the original unlocked baseline is never
/// overwritten by a locked intermediate.
#[derive(Debug, Default)]
pub struct ScrollLock {
    /// Outstanding snapshot, present while the lock is engaged.
    saved: Option<SavedScrollState>,
}

impl ScrollLock {
    /// Create a disengaged lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the lock currently engaged?
    pub fn is_engaged(&self) -> bool {
        self.saved.is_some()
    }

    /// Capture the body's scroll state and pin it. No-op when already
    /// engaged.
    pub fn engage(&mut self, page: &mut dyn Page) {
        if self.saved.is_some() {
            trace!("scroll lock already engaged, keeping original baseline");
            return;
        }
        let offset = page.scroll_offset();
        self.saved = Some(SavedScrollState {
            position: page.body_style(BodyStyle::Position),
            overflow: page.body_style(BodyStyle::Overflow),
            width: page.body_style(BodyStyle::Width),
            offset,
        });
        page.set_body_style(BodyStyle::Position, Some("fixed".into()));
        page.set_body_style(BodyStyle::Top, Some(format!("{}px", -offset)));
        page.set_body_style(BodyStyle::Overflow, Some("hidden".into()));
        page.set_body_style(BodyStyle::Width, Some("100%".into()));
        trace!(offset, "scroll lock engaged");
    }

    /// Restore the captured scroll state. No-op when disengaged.
    pub fn disengage(&mut self, page: &mut dyn Page) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        page.set_body_style(BodyStyle::Position, saved.position);
        page.set_body_style(BodyStyle::Overflow, saved.overflow);
        page.set_body_style(BodyStyle::Width, saved.width);
        page.set_body_style(BodyStyle::Top, None);
        page.scroll_to(saved.offset);
        trace!(offset = saved.offset, "scroll lock disengaged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestPage;

    #[test]
    fn engage_pins_body_and_disengage_restores() {
        let mut page = TestPage::new(1024, 768);
        page.scroll_to(250);
        page.set_body_style(BodyStyle::Width, Some("90%".into()));

        let mut lock = ScrollLock::new();
        lock.engage(&mut page);
        assert!(lock.is_engaged());
        assert_eq!(page.body_style(BodyStyle::Position).as_deref(), Some("fixed"));
        assert_eq!(page.body_style(BodyStyle::Top).as_deref(), Some("-250px"));
        assert_eq!(page.body_style(BodyStyle::Overflow).as_deref(), Some("hidden"));
        assert_eq!(page.body_style(BodyStyle::Width).as_deref(), Some("100%"));

        lock.disengage(&mut page);
        assert!(!lock.is_engaged());
        assert_eq!(page.body_style(BodyStyle::Position), None);
        assert_eq!(page.body_style(BodyStyle::Top), None);
        assert_eq!(page.body_style(BodyStyle::Overflow), None);
        assert_eq!(page.body_style(BodyStyle::Width).as_deref(), Some("90%"));
        assert_eq!(page.scroll_offset(), 250);
    }

    #[test]
    fn double_engage_keeps_first_baseline() {
        let mut page = TestPage::new(1024, 768);
        page.scroll_to(40);

        let mut lock = ScrollLock::new();
        lock.engage(&mut page);
        // A second engage while locked must not snapshot the pinned state.
        page.scroll_to(0);
        lock.engage(&mut page);

        lock.disengage(&mut page);
        assert_eq!(page.scroll_offset(), 40);
        assert_eq!(page.body_style(BodyStyle::Position), None);
    }

    #[test]
    fn disengage_without_engage_is_a_no_op() {
        let mut page = TestPage::new(1024, 768);
        page.scroll_to(10);
        let mut lock = ScrollLock::new();
        lock.disengage(&mut page);
        assert_eq!(page.scroll_offset(), 10);
    }
}
