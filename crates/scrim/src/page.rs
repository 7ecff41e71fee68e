//! The page seam: everything the host needs from the surrounding document.
//!
//! The modal host is headless. All document-level side effects (body style
//! writes, scroll offset, focus position, the focusable contents of the
//! dialog window) go through the [`Page`] trait, so the orchestration logic
//! can be driven identically by a real renderer integration or by the
//! in-memory page in [`crate::testing`].

use slotmap::new_key_type;

new_key_type! {
    /// Opaque identifier for an element known to the page backend.
    pub struct ElementId;
}

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
}

/// The body style properties the scroll lock touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyStyle {
    /// The `position` property.
    Position,
    /// The `overflow` property.
    Overflow,
    /// The `width` property.
    Width,
    /// The `top` property.
    Top,
}

/// Backend trait for the surrounding document.
///
/// Implementations must report the *inline* body style values (the values the
/// lock will later restore), not computed styles.
pub trait Page {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> i64;

    /// Scroll the document to a vertical offset.
    fn scroll_to(&mut self, offset: i64);

    /// Read an inline body style value. `None` when the property is unset.
    fn body_style(&self, prop: BodyStyle) -> Option<String>;

    /// Write an inline body style value. `None` clears the property.
    fn set_body_style(&mut self, prop: BodyStyle, value: Option<String>);

    /// Focusable descendants of the dialog window, in document order. An
    /// element is focusable when its tab index is non-negative.
    fn focusables(&self) -> Vec<ElementId>;

    /// The element that currently holds focus, if any.
    fn focused(&self) -> Option<ElementId>;

    /// Move focus to an element.
    fn focus(&mut self, element: ElementId);
}
