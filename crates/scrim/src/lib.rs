//! Scrim: a headless modal overlay host.
//!
//! A scrim is the dimmed sheet a dialog floats on. This crate owns
//! everything needed to make an overlay dialog behave correctly (focus
//! containment, background scroll suppression, outside-click and escape-key
//! dismissal, and enter/exit transition sequencing) while delegating all
//! drawing to the embedding renderer and all caller content to an opaque
//! [`Content`] collaborator.
//!
//! # Quick start
//!
//! The main entry points are:
//! - [`ModalHost`] - the orchestrator: session state machine, input
//!   dispatch, and the scroll/focus side effects
//! - [`ModalControl`] - the imperative API descendants obtain through a
//!   [`ContextRegistry`]
//! - [`Page`] - the backend seam to the surrounding document
//!
//! # Module organization
//!
//! - [`config`] - per-session configuration, defaults and merging
//! - [`event`] - input primitives and the lifecycle event surface
//! - [`scene`] - the resolved render description for one frame
//! - [`testing`] - an in-memory [`Page`] for driving the host in tests

#![warn(missing_docs)]

/// Per-session configuration.
pub mod config;
/// Typed dependency injection for descendants.
pub mod context;
/// The content collaborator trait.
pub mod content;
/// Crate error types.
pub mod error;
/// Input primitives and lifecycle events.
pub mod event;
/// Focus containment.
pub mod focus;
/// The host orchestrator.
pub mod host;
/// Outside-click dismissal.
pub mod outside;
/// The page backend seam.
pub mod page;
/// Resolved render descriptions.
pub mod scene;
/// Background scroll suppression.
pub mod scroll;
/// Live session state.
pub mod session;
/// Inline style resolution.
pub mod style;
/// Test support.
pub mod testing;
/// Transition sequencing.
pub mod transition;

pub use config::{CloseButton, ModalConfig, ModalConfigPatch, Region};
pub use content::{Content, Props};
pub use context::ContextRegistry;
pub use error::{Error, Result};
pub use event::{Emitter, Key, KeyCode, ModalEvent, Mods, Pointer, SubscriptionId};
pub use host::{EventOutcome, ModalControl, ModalHost, Phase, ShowRequest};
pub use page::{BodyStyle, ElementId, Page, Viewport};
pub use scene::{RegionAttrs, Scene};
pub use session::{Callback, CallbackSet, CloseCallbacks, ModalSession};
pub use style::StyleMap;
pub use transition::{TransitionFn, TransitionParams, TransitionPhase, TransitionRun, TransitionSpec};
