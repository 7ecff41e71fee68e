//! Pointer input primitives for the modal host's dismissal surface.

use crate::config::Region;

/// Pointer action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
}

/// Pointer button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}

/// A pointer event as delivered to the host: the action, the button, and the
/// overlay region the event target resolved to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Pointer {
    /// Pointer action type.
    pub action: Action,
    /// Pointer button.
    pub button: Button,
    /// Overlay region that was the exact event target.
    pub target: Region,
}

impl Pointer {
    /// A primary-button press on `target`.
    pub fn down(target: Region) -> Self {
        Self {
            action: Action::Down,
            button: Button::Left,
            target,
        }
    }

    /// A primary-button release on `target`.
    pub fn up(target: Region) -> Self {
        Self {
            action: Action::Up,
            button: Button::Left,
            target,
        }
    }
}
