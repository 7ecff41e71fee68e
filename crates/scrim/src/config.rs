//! Per-session configuration: defaults, caller overrides, and the merge
//! between them.
//!
//! A fresh [`ModalConfig`] is computed by merging a [`ModalConfigPatch`]
//! onto [`ModalConfig::default`] every time open or content-swap is
//! requested, and is immutable for the lifetime of that session.

use std::rc::Rc;

use crate::{
    content::Content,
    style::StyleMap,
    transition::{TransitionController, TransitionSpec},
};

/// The overlay regions, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The full-viewport backdrop.
    Background,
    /// The centering wrapper between backdrop and window.
    Wrapper,
    /// The dialog window.
    Window,
    /// The caller-content area inside the window.
    Content,
    /// The close button.
    CloseButton,
}

impl Region {
    /// The default class name for this region, used unless the config is
    /// unstyled.
    pub fn default_class(self) -> &'static str {
        match self {
            Self::Background => "scrim-background",
            Self::Wrapper => "scrim-wrapper",
            Self::Window => "scrim-window",
            Self::Content => "scrim-content",
            Self::CloseButton => "scrim-close",
        }
    }
}

/// The close-button slot.
///
/// The original surface overloaded one value as "hidden", "default", or "a
/// custom renderer"; here that is a tagged variant.
#[derive(Clone, Default)]
pub enum CloseButton {
    /// No close button.
    None,
    /// The host's default close button.
    #[default]
    Default,
    /// A caller-supplied close-button renderer.
    Custom(Rc<dyn Content>),
}

impl CloseButton {
    /// Is a close button present in any form?
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Debug for CloseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Default => write!(f, "Default"),
            Self::Custom(c) => write!(f, "Custom({})", c.name()),
        }
    }
}

/// Style override maps, one per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionStyles {
    /// Backdrop style overrides.
    pub background: Option<StyleMap>,
    /// Wrapper style overrides.
    pub wrapper: Option<StyleMap>,
    /// Window style overrides.
    pub window: Option<StyleMap>,
    /// Content style overrides.
    pub content: Option<StyleMap>,
    /// Close button style overrides.
    pub close_button: Option<StyleMap>,
}

impl RegionStyles {
    /// The override map for a region, if any.
    pub fn get(&self, region: Region) -> Option<&StyleMap> {
        match region {
            Region::Background => self.background.as_ref(),
            Region::Wrapper => self.wrapper.as_ref(),
            Region::Window => self.window.as_ref(),
            Region::Content => self.content.as_ref(),
            Region::CloseButton => self.close_button.as_ref(),
        }
    }
}

/// Class-name overrides, one per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionClasses {
    /// Backdrop class override.
    pub background: Option<String>,
    /// Wrapper class override.
    pub wrapper: Option<String>,
    /// Window class override.
    pub window: Option<String>,
    /// Content class override.
    pub content: Option<String>,
    /// Close button class override.
    pub close_button: Option<String>,
}

impl RegionClasses {
    /// The class override for a region, if any.
    pub fn get(&self, region: Region) -> Option<&str> {
        match region {
            Region::Background => self.background.as_deref(),
            Region::Wrapper => self.wrapper.as_deref(),
            Region::Window => self.window.as_deref(),
            Region::Content => self.content.as_deref(),
            Region::CloseButton => self.close_button.as_deref(),
        }
    }
}

/// Resolved configuration for one modal session.
#[derive(Debug, Clone)]
pub struct ModalConfig {
    /// Accessibility label for the dialog window.
    pub aria_label: Option<String>,
    /// Id of the element that labels the dialog window.
    pub aria_labelled_by: Option<String>,
    /// Close-button slot.
    pub close_button: CloseButton,
    /// Close the dialog on Escape.
    pub close_on_esc: bool,
    /// Close the dialog on a genuine outside click.
    pub close_on_outside_click: bool,
    /// Per-region style overrides.
    pub styles: RegionStyles,
    /// Per-region class-name overrides.
    pub classes: RegionClasses,
    /// Suppress all default visual styling, leaving only caller-provided
    /// classes and styles.
    pub unstyled: bool,
    /// Disable Tab-cycle focus containment.
    pub focus_trap_disabled: bool,
    /// Backdrop enter/exit transition.
    pub background_transition: Option<TransitionSpec>,
    /// Window enter/exit transition; reuses the backdrop's when absent.
    pub window_transition: Option<TransitionSpec>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            aria_label: None,
            aria_labelled_by: None,
            close_button: CloseButton::Default,
            close_on_esc: true,
            close_on_outside_click: true,
            styles: RegionStyles::default(),
            classes: RegionClasses::default(),
            unstyled: false,
            focus_trap_disabled: false,
            background_transition: None,
            window_transition: None,
        }
    }
}

impl ModalConfig {
    /// Merge a patch onto the documented defaults: only the supplied keys
    /// are replaced.
    pub fn merged(patch: &ModalConfigPatch) -> Self {
        let mut config = Self::default();
        let p = patch.clone();
        if let Some(v) = p.aria_label {
            config.aria_label = Some(v);
        }
        if let Some(v) = p.aria_labelled_by {
            config.aria_labelled_by = Some(v);
        }
        if let Some(v) = p.close_button {
            config.close_button = v;
        }
        if let Some(v) = p.close_on_esc {
            config.close_on_esc = v;
        }
        if let Some(v) = p.close_on_outside_click {
            config.close_on_outside_click = v;
        }
        if let Some(v) = p.background_style {
            config.styles.background = Some(v);
        }
        if let Some(v) = p.wrapper_style {
            config.styles.wrapper = Some(v);
        }
        if let Some(v) = p.window_style {
            config.styles.window = Some(v);
        }
        if let Some(v) = p.content_style {
            config.styles.content = Some(v);
        }
        if let Some(v) = p.close_button_style {
            config.styles.close_button = Some(v);
        }
        if let Some(v) = p.background_class {
            config.classes.background = Some(v);
        }
        if let Some(v) = p.wrapper_class {
            config.classes.wrapper = Some(v);
        }
        if let Some(v) = p.window_class {
            config.classes.window = Some(v);
        }
        if let Some(v) = p.content_class {
            config.classes.content = Some(v);
        }
        if let Some(v) = p.close_button_class {
            config.classes.close_button = Some(v);
        }
        if let Some(v) = p.unstyled {
            config.unstyled = v;
        }
        if let Some(v) = p.focus_trap_disabled {
            config.focus_trap_disabled = v;
        }
        if let Some(v) = p.background_transition {
            config.background_transition = Some(v);
        }
        if let Some(v) = p.window_transition {
            config.window_transition = Some(v);
        }
        config
    }

    /// Build the transition controller for this session.
    pub(crate) fn transitions(&self) -> TransitionController {
        TransitionController::new(
            self.background_transition.clone(),
            self.window_transition.clone(),
        )
    }
}

/// Caller-supplied configuration overrides. Every field is optional; absent
/// fields keep their default.
#[derive(Debug, Clone, Default)]
pub struct ModalConfigPatch {
    /// Accessibility label override.
    pub aria_label: Option<String>,
    /// Labelled-by id override.
    pub aria_labelled_by: Option<String>,
    /// Close-button slot override.
    pub close_button: Option<CloseButton>,
    /// Close-on-escape override.
    pub close_on_esc: Option<bool>,
    /// Close-on-outside-click override.
    pub close_on_outside_click: Option<bool>,
    /// Backdrop style override.
    pub background_style: Option<StyleMap>,
    /// Wrapper style override.
    pub wrapper_style: Option<StyleMap>,
    /// Window style override.
    pub window_style: Option<StyleMap>,
    /// Content style override.
    pub content_style: Option<StyleMap>,
    /// Close button style override.
    pub close_button_style: Option<StyleMap>,
    /// Backdrop class override.
    pub background_class: Option<String>,
    /// Wrapper class override.
    pub wrapper_class: Option<String>,
    /// Window class override.
    pub window_class: Option<String>,
    /// Content class override.
    pub content_class: Option<String>,
    /// Close button class override.
    pub close_button_class: Option<String>,
    /// Unstyled override.
    pub unstyled: Option<bool>,
    /// Focus-trap-disabled override.
    pub focus_trap_disabled: Option<bool>,
    /// Backdrop transition override.
    pub background_transition: Option<TransitionSpec>,
    /// Window transition override.
    pub window_transition: Option<TransitionSpec>,
}

impl ModalConfigPatch {
    /// An empty patch: merging it reproduces the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the close-on-escape override.
    pub fn close_on_esc(mut self, v: bool) -> Self {
        self.close_on_esc = Some(v);
        self
    }

    /// Set the close-on-outside-click override.
    pub fn close_on_outside_click(mut self, v: bool) -> Self {
        self.close_on_outside_click = Some(v);
        self
    }

    /// Set the close-button slot override.
    pub fn close_button(mut self, v: CloseButton) -> Self {
        self.close_button = Some(v);
        self
    }

    /// Set the accessibility label override.
    pub fn aria_label(mut self, v: impl Into<String>) -> Self {
        self.aria_label = Some(v.into());
        self
    }

    /// Set the focus-trap-disabled override.
    pub fn focus_trap_disabled(mut self, v: bool) -> Self {
        self.focus_trap_disabled = Some(v);
        self
    }

    /// Set the unstyled override.
    pub fn unstyled(mut self, v: bool) -> Self {
        self.unstyled = Some(v);
        self
    }

    /// Set the backdrop transition override.
    pub fn background_transition(mut self, v: TransitionSpec) -> Self {
        self.background_transition = Some(v);
        self
    }

    /// Set the window transition override.
    pub fn window_transition(mut self, v: TransitionSpec) -> Self {
        self.window_transition = Some(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_reproduces_defaults() {
        let merged = ModalConfig::merged(&ModalConfigPatch::new());
        assert!(merged.close_on_esc);
        assert!(merged.close_on_outside_click);
        assert!(!merged.unstyled);
        assert!(!merged.focus_trap_disabled);
        assert!(merged.close_button.is_present());
        assert_eq!(merged.styles, RegionStyles::default());
        assert_eq!(merged.classes, RegionClasses::default());
    }

    #[test]
    fn only_supplied_keys_are_replaced() {
        let patch = ModalConfigPatch::new()
            .close_on_esc(false)
            .aria_label("settings");
        let merged = ModalConfig::merged(&patch);
        assert!(!merged.close_on_esc);
        assert_eq!(merged.aria_label.as_deref(), Some("settings"));
        // Untouched keys keep their default.
        assert!(merged.close_on_outside_click);
        assert!(!merged.focus_trap_disabled);
    }

    #[test]
    fn close_button_variants() {
        assert!(!CloseButton::None.is_present());
        assert!(CloseButton::Default.is_present());
    }
}
