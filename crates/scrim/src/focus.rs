//! Keyboard focus containment for the dialog window.
//!
//! The focusable set is the dialog window's focusable descendants in
//! document order, as reported by the page backend. Tab cycles forward and
//! Shift+Tab cycles backward through the set, wrapping at either end.

use crate::page::Page;

/// Direction of a focus cycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    /// Tab: advance to the next focusable element.
    Forward,
    /// Shift+Tab: retreat to the previous focusable element.
    Backward,
}

/// Move focus one step through the dialog's focusable set, wrapping
/// cyclically. Returns `true` if focus moved (the caller should then
/// suppress the default tab behavior).
///
/// When current focus is outside the set, a forward step lands on the first
/// element and a backward step lands on the last. An empty focusable set is
/// an explicit no-op: there is nothing to land on, and the wrap arithmetic
/// is undefined over zero elements.
pub fn cycle(page: &mut dyn Page, direction: CycleDirection) -> bool {
    let focusables = page.focusables();
    if focusables.is_empty() {
        return false;
    }
    let len = focusables.len() as isize;
    let position = page
        .focused()
        .and_then(|el| focusables.iter().position(|f| *f == el));
    let index = match position {
        Some(i) => i as isize,
        // Focus starts outside the set: pick a phantom index so the step
        // below lands on the first element (forward) or the last (backward).
        None => match direction {
            CycleDirection::Forward => -1,
            CycleDirection::Backward => 0,
        },
    };
    let step = match direction {
        CycleDirection::Forward => 1,
        CycleDirection::Backward => -1,
    };
    let next = (index + step).rem_euclid(len) as usize;
    page.focus(focusables[next]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestPage;

    #[test]
    fn tab_advances_and_wraps() {
        let mut page = TestPage::new(100, 100);
        let a = page.add_element(0);
        let b = page.add_element(0);
        let c = page.add_element(1);

        page.focus(a);
        assert!(cycle(&mut page, CycleDirection::Forward));
        assert_eq!(page.focused(), Some(b));

        page.focus(c);
        assert!(cycle(&mut page, CycleDirection::Forward));
        assert_eq!(page.focused(), Some(a), "third element wraps to first");
    }

    #[test]
    fn shift_tab_retreats_and_wraps() {
        let mut page = TestPage::new(100, 100);
        let a = page.add_element(0);
        let b = page.add_element(0);
        let c = page.add_element(0);

        page.focus(b);
        assert!(cycle(&mut page, CycleDirection::Backward));
        assert_eq!(page.focused(), Some(a));

        assert!(cycle(&mut page, CycleDirection::Backward));
        assert_eq!(page.focused(), Some(c), "first element wraps to last");
    }

    #[test]
    fn outside_focus_lands_on_first_or_last() {
        let mut page = TestPage::new(100, 100);
        let a = page.add_element(0);
        page.add_element(0);

        assert!(cycle(&mut page, CycleDirection::Forward));
        assert_eq!(page.focused(), Some(a));

        let mut page = TestPage::new(100, 100);
        page.add_element(0);
        let last = page.add_element(0);
        assert!(cycle(&mut page, CycleDirection::Backward));
        assert_eq!(page.focused(), Some(last));
    }

    #[test]
    fn negative_tab_index_is_excluded() {
        let mut page = TestPage::new(100, 100);
        let a = page.add_element(0);
        page.add_element(-1);
        let c = page.add_element(2);

        page.focus(a);
        assert!(cycle(&mut page, CycleDirection::Forward));
        assert_eq!(page.focused(), Some(c));
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut page = TestPage::new(100, 100);
        assert!(!cycle(&mut page, CycleDirection::Forward));
        assert!(!cycle(&mut page, CycleDirection::Backward));
        assert_eq!(page.focused(), None);
    }
}
