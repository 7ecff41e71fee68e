//! Keyboard input primitives for the modal host's key surface.

use std::ops::Add;

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, code: key }
    }
}

/// Key codes the host reacts to, plus a catch-all for character input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    /// The Escape key.
    Esc,
    /// The Tab key.
    Tab,
    /// The Enter key.
    Enter,
    /// A character key.
    Char(char),
}

/// A keyboard event: a key code plus modifier state.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Active modifiers.
    pub mods: Mods,
    /// The key code.
    pub code: KeyCode,
}

impl Key {
    /// Is this Escape with no modifiers?
    pub fn is_esc(&self) -> bool {
        self.code == KeyCode::Esc && self.mods == Empty
    }

    /// Is this Tab, with or without Shift?
    pub fn is_tab(&self) -> bool {
        self.code == KeyCode::Tab && !self.mods.ctrl && !self.mods.alt
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self { mods: Empty, code }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        KeyCode::Char(c).into()
    }
}
