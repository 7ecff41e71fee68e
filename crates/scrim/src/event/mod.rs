//! Input primitives and the public lifecycle event surface.

/// Keyboard input types.
pub mod key;
/// Pointer input types.
pub mod mouse;

use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

pub use key::{Key, KeyCode, Mods};
pub use mouse::Pointer;

new_key_type! {
    /// Opaque identifier for a lifecycle event subscription.
    pub struct SubscriptionId;
}

/// Public lifecycle events observable by the host's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalEvent {
    /// The enter transition has started and a session is active.
    Open,
    /// The enter transition has finished.
    Opened,
    /// The exit transition has started and the session is cleared.
    Close,
    /// The exit transition has finished.
    Closed,
    /// Alias for [`ModalEvent::Open`], kept for backward compatibility.
    #[deprecated(note = "use ModalEvent::Open")]
    Opening,
    /// Alias for [`ModalEvent::Close`], kept for backward compatibility.
    #[deprecated(note = "use ModalEvent::Close")]
    Closing,
}

/// Internal lifecycle signal. Each signal maps to one canonical public event
/// and, for the start boundaries, a deprecated alias emitted alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    /// Enter transition start.
    EnterStart,
    /// Enter transition end.
    EnterEnd,
    /// Exit transition start.
    ExitStart,
    /// Exit transition end.
    ExitEnd,
}

impl Signal {
    /// The canonical event for this signal.
    pub(crate) fn canonical(self) -> ModalEvent {
        match self {
            Self::EnterStart => ModalEvent::Open,
            Self::EnterEnd => ModalEvent::Opened,
            Self::ExitStart => ModalEvent::Close,
            Self::ExitEnd => ModalEvent::Closed,
        }
    }

    /// The deprecated alias for this signal, if one exists.
    #[allow(deprecated)]
    pub(crate) fn alias(self) -> Option<ModalEvent> {
        match self {
            Self::EnterStart => Some(ModalEvent::Opening),
            Self::ExitStart => Some(ModalEvent::Closing),
            Self::EnterEnd | Self::ExitEnd => None,
        }
    }
}

/// A lifecycle event listener.
pub type Listener = Rc<dyn Fn(ModalEvent)>;

/// Registry of lifecycle event listeners.
#[derive(Default)]
pub struct Emitter {
    /// Registered listeners keyed by subscription.
    subs: SlotMap<SubscriptionId, Listener>,
}

impl Emitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for all lifecycle events. Returns a handle that
    /// can later be passed to [`Emitter::unsubscribe`].
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.subs.insert(listener)
    }

    /// Remove a listener. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subs.remove(id);
    }

    /// Snapshot the current listener set so events can be fired after any
    /// internal borrows are released.
    pub(crate) fn snapshot(&self) -> Listeners {
        Listeners {
            subs: self.subs.values().cloned().collect(),
        }
    }
}

/// A point-in-time copy of the listener set.
pub(crate) struct Listeners {
    /// Listeners captured at snapshot time.
    subs: Vec<Listener>,
}

impl Listeners {
    /// Fire the canonical event for `signal` to every listener, then the
    /// deprecated alias if the signal has one. Both names come from this one
    /// dispatch point, so the alias shim can be deleted without touching the
    /// host.
    pub(crate) fn fire(&self, signal: Signal) {
        for sub in &self.subs {
            sub(signal.canonical());
        }
        if let Some(alias) = signal.alias() {
            for sub in &self.subs {
                sub(alias);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn alias_fires_with_canonical() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();
        let seen2 = seen.clone();
        emitter.subscribe(Rc::new(move |e| seen2.borrow_mut().push(e)));

        emitter.snapshot().fire(Signal::EnterStart);
        emitter.snapshot().fire(Signal::EnterEnd);

        #[allow(deprecated)]
        let expected = vec![ModalEvent::Open, ModalEvent::Opening, ModalEvent::Opened];
        assert_eq!(*seen.borrow(), expected);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();
        let seen2 = seen.clone();
        let id = emitter.subscribe(Rc::new(move |e| seen2.borrow_mut().push(e)));
        emitter.unsubscribe(id);

        emitter.snapshot().fire(Signal::ExitEnd);
        assert!(seen.borrow().is_empty());
    }
}
