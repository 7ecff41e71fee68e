//! Test support: an in-memory page backend.
//!
//! [`TestPage`] implements [`Page`] over plain data structures so the host's
//! orchestration can be exercised and inspected without a real document.

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::page::{BodyStyle, ElementId, Page, Viewport};

/// An element known to the test page.
#[derive(Debug, Clone, Copy)]
struct TestElement {
    /// Tab index; negative means not focusable.
    tab_index: i32,
}

/// In-memory page backend.
pub struct TestPage {
    /// Viewport dimensions.
    viewport: Viewport,
    /// Vertical scroll offset.
    scroll: i64,
    /// Inline body style values.
    body: BTreeMap<BodyStyle, String>,
    /// Element storage.
    elements: SlotMap<ElementId, TestElement>,
    /// Document order of elements in the dialog window.
    order: Vec<ElementId>,
    /// Currently focused element.
    focused: Option<ElementId>,
}

impl TestPage {
    /// Create a page with the given viewport dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport { width, height },
            scroll: 0,
            body: BTreeMap::new(),
            elements: SlotMap::with_key(),
            order: Vec::new(),
            focused: None,
        }
    }

    /// Append an element to the dialog window in document order. A negative
    /// tab index makes the element non-focusable.
    pub fn add_element(&mut self, tab_index: i32) -> ElementId {
        let id = self.elements.insert(TestElement { tab_index });
        self.order.push(id);
        id
    }

    /// Remove all elements from the dialog window.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
        self.order.clear();
        self.focused = None;
    }

    /// All inline body style values currently set, for whole-state
    /// assertions.
    pub fn body_styles(&self) -> &BTreeMap<BodyStyle, String> {
        &self.body
    }
}

impl Page for TestPage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_offset(&self) -> i64 {
        self.scroll
    }

    fn scroll_to(&mut self, offset: i64) {
        self.scroll = offset;
    }

    fn body_style(&self, prop: BodyStyle) -> Option<String> {
        self.body.get(&prop).cloned()
    }

    fn set_body_style(&mut self, prop: BodyStyle, value: Option<String>) {
        match value {
            Some(v) => {
                self.body.insert(prop, v);
            }
            None => {
                self.body.remove(&prop);
            }
        }
    }

    fn focusables(&self) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.elements[*id].tab_index >= 0)
            .collect()
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn focus(&mut self, element: ElementId) {
        if self.elements.contains_key(element) {
            self.focused = Some(element);
        }
    }
}
