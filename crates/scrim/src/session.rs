//! Live state of one displayed modal.

use std::{fmt, rc::Rc};

use crate::{config::ModalConfig, content::Content, content::Props};

/// A lifecycle hook supplied at open time.
pub type Callback = Rc<dyn Fn()>;

/// Optional hooks fired at the four lifecycle boundaries, in addition to the
/// host's public events.
#[derive(Clone, Default)]
pub struct CallbackSet {
    /// Fired at enter-transition start.
    pub on_open: Option<Callback>,
    /// Fired at exit-transition start.
    pub on_close: Option<Callback>,
    /// Fired at enter-transition end.
    pub on_opened: Option<Callback>,
    /// Fired at exit-transition end.
    pub on_closed: Option<Callback>,
}

impl fmt::Debug for CallbackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSet")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_opened", &self.on_opened.is_some())
            .field("on_closed", &self.on_closed.is_some())
            .finish()
    }
}

/// One-shot overrides for the close boundaries, supplied to `close`.
#[derive(Clone, Default)]
pub struct CloseCallbacks {
    /// Replaces the session's `on_close` for this close.
    pub on_close: Option<Callback>,
    /// Replaces the session's `on_closed` for this close.
    pub on_closed: Option<Callback>,
}

/// Live state of the currently displayed modal. Created on open, replaced on
/// content-swap, destroyed on close.
pub struct ModalSession {
    /// The active content renderer.
    pub content: Rc<dyn Content>,
    /// Merged default-plus-caller properties the content was shown with.
    pub props: Props,
    /// Resolved configuration, immutable for this session.
    pub config: ModalConfig,
    /// Whether the nested loading overlay is shown.
    pub loading: bool,
    /// Lifecycle hooks supplied at open time.
    pub callbacks: CallbackSet,
}

impl fmt::Debug for ModalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalSession")
            .field("content", &self.content.name())
            .field("loading", &self.loading)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
