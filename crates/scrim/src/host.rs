//! The modal host: session state machine, imperative control surface, and
//! input dispatch.
//!
//! [`ModalHost`] owns the current session, the scroll lock, and the page
//! backend. All mutations happen synchronously inside the public API calls
//! and input handlers; transition-boundary callbacks are the only
//! asynchronous re-entry points, and they re-acquire state through a weak
//! handle so a dropped host simply ignores stragglers.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::{debug, trace, warn};

use crate::{
    config::{ModalConfig, ModalConfigPatch, Region},
    content::{self, Content, Props},
    event::{Emitter, Key, Listener, Listeners, Pointer, Signal, SubscriptionId, mouse::Action},
    focus::{self, CycleDirection},
    outside::OutsideClickDetector,
    page::Page,
    scene::{self, Scene},
    scroll::ScrollLock,
    session::{Callback, CallbackSet, CloseCallbacks, ModalSession},
    transition::{TransitionController, TransitionPhase},
};

/// Host lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session.
    Closed,
    /// Session created, enter transition running.
    Opening,
    /// Enter transition finished.
    Open,
    /// Exit transition running, session already cleared.
    Closing,
}

/// The result of an input handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event was processed; the caller should suppress default handling.
    Handle,
    /// The event was not handled.
    Ignore,
}

/// The imperative control API, obtainable by any descendant through the
/// context registry under the well-known `Rc<dyn ModalControl>` key.
pub trait ModalControl {
    /// Open a modal, replacing any current session.
    fn open(
        &self,
        content: Rc<dyn Content>,
        props: Option<Props>,
        patch: Option<ModalConfigPatch>,
        callbacks: CallbackSet,
    );

    /// Swap the current session's content and configuration.
    fn change_content(
        &self,
        content: Rc<dyn Content>,
        props: Option<Props>,
        patch: Option<ModalConfigPatch>,
    );

    /// Close the current session, if any.
    fn close(&self, overrides: CloseCallbacks);

    /// Toggle the session's loading flag.
    fn set_loading(&self, loading: bool);
}

/// A declaratively bound "show" request: when bound to a value the host
/// opens it, when cleared the host closes.
#[derive(Clone)]
pub struct ShowRequest {
    /// Content to show.
    pub content: Rc<dyn Content>,
    /// Caller props.
    pub props: Option<Props>,
    /// Configuration overrides.
    pub patch: Option<ModalConfigPatch>,
    /// Lifecycle hooks.
    pub callbacks: CallbackSet,
}

impl ShowRequest {
    /// A request with no props, overrides, or hooks.
    pub fn new(content: Rc<dyn Content>) -> Self {
        Self {
            content,
            props: None,
            patch: None,
            callbacks: CallbackSet::default(),
        }
    }
}

/// Internal host state behind the shared cell.
struct Inner<P: Page> {
    /// The page backend.
    page: P,
    /// Current lifecycle phase.
    phase: Phase,
    /// The active session, if any.
    session: Option<ModalSession>,
    /// The body scroll lock.
    lock: ScrollLock,
    /// Outside-click state.
    outside: OutsideClickDetector,
    /// Lifecycle event listeners.
    emitter: Emitter,
    /// Whether `mount` has run; the show binding is inert before that.
    mounted: bool,
    /// Last bound show value.
    show: Option<ShowRequest>,
    /// Whether the show binding has ever been assigned.
    show_bound: bool,
    /// Bumped on every open so stale enter-transition completions are
    /// ignored after an intervening close.
    open_gen: u64,
    /// Exit transitions still running.
    pending_exits: usize,
}

impl<P: Page> Drop for Inner<P> {
    fn drop(&mut self) {
        // The lock must never outlive the host, abnormal teardown included.
        let Self { lock, page, .. } = self;
        lock.disengage(page);
    }
}

/// Deferred side effects, run only after the state borrow is released so
/// listeners and hooks can re-enter the host.
#[derive(Default)]
struct Effects {
    /// Content that stopped being the active renderer.
    unmounted: Option<Rc<dyn Content>>,
    /// Content that became the active renderer, with its merged props.
    mounted: Option<(Rc<dyn Content>, Props)>,
    /// Boundary hook to fire.
    hook: Option<Callback>,
    /// Boundary signal to emit, with the listener snapshot taken while the
    /// borrow was held.
    signal: Option<(Listeners, Signal)>,
    /// Transition phase to run.
    transition: Option<(TransitionController, TransitionPhase, TransitionEnd)>,
}

/// Completion callback for a transition phase.
type TransitionEnd = Box<dyn FnOnce()>;

impl Effects {
    /// Run the collected effects in order: content unmount, content mount,
    /// boundary hook, boundary event, transition.
    fn run(self) {
        if let Some(old) = self.unmounted {
            old.unmounted();
        }
        if let Some((new, props)) = self.mounted {
            new.mounted(&props);
        }
        if let Some(hook) = self.hook {
            hook();
        }
        if let Some((listeners, signal)) = self.signal {
            listeners.fire(signal);
        }
        if let Some((controller, phase, on_end)) = self.transition {
            controller.run(phase, on_end);
        }
    }
}

/// The modal host.
///
/// Generic over the page backend; descendants interact with it through the
/// type-erased [`ModalControl`] handle from [`ModalHost::control`].
pub struct ModalHost<P: Page + 'static> {
    /// Shared host state.
    inner: Rc<RefCell<Inner<P>>>,
}

impl<P: Page + 'static> ModalHost<P> {
    /// Create a host over a page backend. The host starts unmounted and
    /// closed.
    pub fn new(page: P) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                page,
                phase: Phase::Closed,
                session: None,
                lock: ScrollLock::new(),
                outside: OutsideClickDetector::new(),
                emitter: Emitter::new(),
                mounted: false,
                show: None,
                show_bound: false,
                open_gen: 0,
                pending_exits: 0,
            })),
        }
    }

    /// A shareable, type-erased control handle. The handle holds the host
    /// weakly: calls after the host is dropped are no-ops.
    pub fn control(&self) -> Rc<dyn ModalControl> {
        Rc::new(HostControl {
            inner: Rc::downgrade(&self.inner),
        })
    }

    /// Register a lifecycle event listener.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.inner.borrow_mut().emitter.subscribe(listener)
    }

    /// Remove a lifecycle event listener.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().emitter.unsubscribe(id);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.inner.borrow().phase
    }

    /// Is a session active?
    pub fn has_session(&self) -> bool {
        self.inner.borrow().session.is_some()
    }

    /// Is the session's loading overlay shown?
    pub fn is_loading(&self) -> bool {
        self.inner
            .borrow()
            .session
            .as_ref()
            .is_some_and(|s| s.loading)
    }

    /// The resolved render description for the current session, or `None`
    /// when nothing is displayed.
    pub fn scene(&self) -> Option<Scene> {
        let inner = self.inner.borrow();
        let viewport = inner.page.viewport();
        inner.session.as_ref().map(|s| scene::build(s, viewport))
    }

    /// Inspect the page backend.
    pub fn page<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.inner.borrow().page)
    }

    /// Mutate the page backend.
    pub fn page_mut<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        f(&mut self.inner.borrow_mut().page)
    }

    /// Begin reacting to the declarative show binding. If a value was bound
    /// before mounting, it is applied now.
    pub fn mount(&self) {
        let apply = {
            let mut inner = self.inner.borrow_mut();
            inner.mounted = true;
            inner.show_bound.then(|| inner.show.clone())
        };
        if let Some(value) = apply {
            apply_show(&self.inner, value);
        }
    }

    /// Stop the host: force-close any active session and release the scroll
    /// lock. Safe to call repeatedly.
    pub fn unmount(&self) {
        close_impl(&self.inner, CloseCallbacks::default());
        let mut inner = self.inner.borrow_mut();
        inner.mounted = false;
        let Inner { lock, page, .. } = &mut *inner;
        lock.disengage(page);
    }

    /// Assign the declarative show binding. Re-evaluated on every
    /// assignment once the host is mounted: a value opens it, `None`
    /// closes.
    pub fn set_show(&self, value: Option<ShowRequest>) {
        let mounted = {
            let mut inner = self.inner.borrow_mut();
            inner.show = value.clone();
            inner.show_bound = true;
            inner.mounted
        };
        if mounted {
            apply_show(&self.inner, value);
        }
    }

    /// Open a modal. Re-entrant: opening while a session is active replaces
    /// its content and configuration without a second scroll-lock capture
    /// and without restarting the running transition.
    pub fn open(
        &self,
        content: Rc<dyn Content>,
        props: Option<Props>,
        patch: Option<ModalConfigPatch>,
        callbacks: CallbackSet,
    ) {
        open_impl(&self.inner, content, props, patch, callbacks);
    }

    /// Swap the current session's content and configuration without touching
    /// the scroll lock or transition state. Silently dropped when no session
    /// exists.
    pub fn change_content(
        &self,
        content: Rc<dyn Content>,
        props: Option<Props>,
        patch: Option<ModalConfigPatch>,
    ) {
        change_content_impl(&self.inner, content, props, patch);
    }

    /// Close the current session. No-op when nothing is open.
    pub fn close(&self, overrides: CloseCallbacks) {
        close_impl(&self.inner, overrides);
    }

    /// Toggle the session's loading flag. No effect outside an active
    /// session.
    pub fn set_loading(&self, loading: bool) {
        set_loading_impl(&self.inner, loading);
    }

    /// Dispatch a keyboard event. Escape closes when the session allows it;
    /// Tab and Shift+Tab cycle focus within the dialog window unless the
    /// trap is disabled.
    pub fn handle_key(&self, key: Key) -> EventOutcome {
        let (esc_closes, cycled) = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let Some(session) = inner.session.as_ref() else {
                return EventOutcome::Ignore;
            };
            if key.is_esc() {
                (session.config.close_on_esc, None)
            } else if key.is_tab() && !session.config.focus_trap_disabled {
                let direction = if key.mods.shift {
                    CycleDirection::Backward
                } else {
                    CycleDirection::Forward
                };
                let moved = focus::cycle(&mut inner.page, direction);
                (false, Some(moved))
            } else {
                return EventOutcome::Ignore;
            }
        };
        if esc_closes {
            close_impl(&self.inner, CloseCallbacks::default());
            return EventOutcome::Handle;
        }
        match cycled {
            Some(true) => EventOutcome::Handle,
            _ => EventOutcome::Ignore,
        }
    }

    /// Dispatch a pointer event. Presses and releases feed the outside-click
    /// detector; a release on the close button requests close.
    pub fn handle_pointer(&self, pointer: Pointer) -> EventOutcome {
        let close_now = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            let Some(session) = inner.session.as_ref() else {
                return EventOutcome::Ignore;
            };
            let dismiss = session.config.close_on_outside_click;
            let close_button = session.config.close_button.is_present();
            match pointer.action {
                Action::Down => {
                    inner.outside.pointer_down(dismiss, pointer.target);
                    false
                }
                Action::Up => {
                    if pointer.target == Region::CloseButton && close_button {
                        true
                    } else {
                        inner.outside.pointer_up(dismiss, pointer.target)
                    }
                }
            }
        };
        if close_now {
            close_impl(&self.inner, CloseCallbacks::default());
            EventOutcome::Handle
        } else {
            EventOutcome::Ignore
        }
    }
}

impl<P: Page + 'static> Drop for ModalHost<P> {
    fn drop(&mut self) {
        // Inner's own Drop releases the lock; nothing else to do here, but
        // unmount notifications still reach the active content.
        if let Ok(mut inner) = self.inner.try_borrow_mut()
            && let Some(session) = inner.session.take()
        {
            drop(inner);
            session.content.unmounted();
        }
    }
}

/// Weak control handle handed to descendants.
struct HostControl<P: Page> {
    /// Weakly held host state.
    inner: Weak<RefCell<Inner<P>>>,
}

impl<P: Page + 'static> ModalControl for HostControl<P> {
    fn open(
        &self,
        content: Rc<dyn Content>,
        props: Option<Props>,
        patch: Option<ModalConfigPatch>,
        callbacks: CallbackSet,
    ) {
        if let Some(inner) = self.inner.upgrade() {
            open_impl(&inner, content, props, patch, callbacks);
        }
    }

    fn change_content(
        &self,
        content: Rc<dyn Content>,
        props: Option<Props>,
        patch: Option<ModalConfigPatch>,
    ) {
        if let Some(inner) = self.inner.upgrade() {
            change_content_impl(&inner, content, props, patch);
        }
    }

    fn close(&self, overrides: CloseCallbacks) {
        if let Some(inner) = self.inner.upgrade() {
            close_impl(&inner, overrides);
        }
    }

    fn set_loading(&self, loading: bool) {
        if let Some(inner) = self.inner.upgrade() {
            set_loading_impl(&inner, loading);
        }
    }
}

/// Apply a show-binding value: open the bound content or close.
fn apply_show<P: Page + 'static>(rc: &Rc<RefCell<Inner<P>>>, value: Option<ShowRequest>) {
    match value {
        Some(req) => open_impl(rc, req.content, req.props, req.patch, req.callbacks),
        None => close_impl(rc, CloseCallbacks::default()),
    }
}

/// Build a session from caller inputs.
fn build_session(
    content: Rc<dyn Content>,
    props: Option<&Props>,
    patch: Option<&ModalConfigPatch>,
    callbacks: CallbackSet,
) -> ModalSession {
    let config = ModalConfig::merged(patch.unwrap_or(&ModalConfigPatch::default()));
    let props = content::merge_props(content.default_props(), props);
    ModalSession {
        content,
        props,
        config,
        loading: false,
        callbacks,
    }
}

/// Shared implementation of `open`.
fn open_impl<P: Page + 'static>(
    rc: &Rc<RefCell<Inner<P>>>,
    content: Rc<dyn Content>,
    props: Option<Props>,
    patch: Option<ModalConfigPatch>,
    callbacks: CallbackSet,
) {
    let mut effects = Effects::default();
    {
        let mut inner = rc.borrow_mut();
        let session = build_session(content, props.as_ref(), patch.as_ref(), callbacks);
        effects.mounted = Some((session.content.clone(), session.props.clone()));
        let transitions = session.config.transitions();
        let on_open = session.callbacks.on_open.clone();
        if let Some(old) = inner.session.replace(session) {
            effects.unmounted = Some(old.content);
        }

        if matches!(inner.phase, Phase::Opening | Phase::Open) {
            // Content swap under the running (or finished) enter transition.
            debug!("open while active: session replaced");
        } else {
            inner.open_gen += 1;
            let generation = inner.open_gen;
            inner.phase = Phase::Opening;
            debug!("modal opening");
            let Inner { lock, page, .. } = &mut *inner;
            lock.engage(page);

            effects.hook = on_open;
            effects.signal = Some((inner.emitter.snapshot(), Signal::EnterStart));

            let weak = Rc::downgrade(rc);
            let on_end: TransitionEnd = Box::new(move || enter_finished(&weak, generation));
            effects.transition = Some((transitions, TransitionPhase::Enter, on_end));
        }
    }
    effects.run();
}

/// Enter-transition completion: advance Opening to Open and fire the
/// `opened` boundary, unless the session was closed (or replaced by a later
/// open) in the meantime.
fn enter_finished<P: Page + 'static>(weak: &Weak<RefCell<Inner<P>>>, generation: u64) {
    let Some(rc) = weak.upgrade() else {
        return;
    };
    let fired = {
        let mut inner = rc.borrow_mut();
        if inner.open_gen != generation || inner.phase != Phase::Opening {
            trace!("stale enter transition completion ignored");
            None
        } else {
            inner.phase = Phase::Open;
            debug!("modal open");
            let hook = inner
                .session
                .as_ref()
                .and_then(|s| s.callbacks.on_opened.clone());
            Some((hook, inner.emitter.snapshot()))
        }
    };
    if let Some((hook, listeners)) = fired {
        if let Some(hook) = hook {
            hook();
        }
        listeners.fire(Signal::EnterEnd);
    }
}

/// Shared implementation of `change_content`.
fn change_content_impl<P: Page>(
    rc: &Rc<RefCell<Inner<P>>>,
    content: Rc<dyn Content>,
    props: Option<Props>,
    patch: Option<ModalConfigPatch>,
) {
    let mut effects = Effects::default();
    {
        let mut inner = rc.borrow_mut();
        let Some(old) = inner.session.take() else {
            // Documented policy: dropped, not thrown.
            warn!("content change dropped: no active session");
            return;
        };
        let session = build_session(content, props.as_ref(), patch.as_ref(), old.callbacks.clone());
        effects.unmounted = Some(old.content);
        effects.mounted = Some((session.content.clone(), session.props.clone()));
        inner.session = Some(session);
        debug!("modal content changed");
    }
    effects.run();
}

/// Shared implementation of `close`.
fn close_impl<P: Page + 'static>(rc: &Rc<RefCell<Inner<P>>>, overrides: CloseCallbacks) {
    let mut effects = Effects::default();
    {
        let mut inner = rc.borrow_mut();
        let Some(session) = inner.session.take() else {
            return;
        };
        inner.phase = Phase::Closing;
        inner.pending_exits += 1;
        debug!("modal closing");
        inner.outside.reset();
        // The exit visual transition and scroll restoration may run in any
        // relative order; the lock is released here, synchronously with the
        // session clearing, so a follow-up open sees it disengaged.
        let Inner { lock, page, .. } = &mut *inner;
        lock.disengage(page);

        let on_close = overrides.on_close.or(session.callbacks.on_close.clone());
        let on_closed = overrides.on_closed.or(session.callbacks.on_closed.clone());

        effects.unmounted = Some(session.content.clone());
        effects.hook = on_close;
        effects.signal = Some((inner.emitter.snapshot(), Signal::ExitStart));

        let weak = Rc::downgrade(rc);
        let on_end: TransitionEnd = Box::new(move || exit_finished(&weak, on_closed));
        effects.transition = Some((
            session.config.transitions(),
            TransitionPhase::Exit,
            on_end,
        ));
    }
    effects.run();
}

/// Exit-transition completion: fire the `closed` boundary and, once no exits
/// remain in flight and no new session opened, settle in Closed.
fn exit_finished<P: Page>(weak: &Weak<RefCell<Inner<P>>>, on_closed: Option<Callback>) {
    let Some(rc) = weak.upgrade() else {
        return;
    };
    let listeners = {
        let mut inner = rc.borrow_mut();
        inner.pending_exits = inner.pending_exits.saturating_sub(1);
        if inner.pending_exits == 0 && inner.session.is_none() && inner.phase == Phase::Closing {
            inner.phase = Phase::Closed;
            debug!("modal closed");
        }
        inner.emitter.snapshot()
    };
    if let Some(hook) = on_closed {
        hook();
    }
    listeners.fire(Signal::ExitEnd);
}

/// Shared implementation of `set_loading`.
fn set_loading_impl<P: Page>(rc: &Rc<RefCell<Inner<P>>>, loading: bool) {
    let mut inner = rc.borrow_mut();
    match inner.session.as_mut() {
        Some(session) => session.loading = loading,
        None => trace!("loading toggle ignored: no active session"),
    }
}
