//! Enter/exit transition sequencing.
//!
//! Visual transitions are caller-supplied: the host invokes a transition
//! function per region at the start of each phase and hands it a completion
//! handle. The phase's end boundary fires once every started region has
//! reported completion, or immediately when no transition function is
//! configured. The background and window regions may carry different
//! functions and parameters; the window falls back to reusing the
//! background's unless overridden.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use serde_json::Value;

use crate::config::Region;

/// Parameter object passed through to a transition function, opaque to the
/// host.
pub type TransitionParams = Value;

/// A caller-supplied transition function.
///
/// The function owns the visual effect; the host only cares that
/// [`TransitionRun::finish`] is eventually called. Calling it synchronously
/// is fine and is what a no-animation integration does.
pub type TransitionFn = Rc<dyn Fn(TransitionRun)>;

/// A transition function plus its parameter object.
#[derive(Clone)]
pub struct TransitionSpec {
    /// The transition function.
    pub func: TransitionFn,
    /// Parameters handed to the function on each run.
    pub params: TransitionParams,
}

impl TransitionSpec {
    /// Create a spec with null parameters.
    pub fn new(func: TransitionFn) -> Self {
        Self {
            func,
            params: Value::Null,
        }
    }

    /// Create a spec with an explicit parameter object.
    pub fn with_params(func: TransitionFn, params: TransitionParams) -> Self {
        Self { func, params }
    }
}

impl fmt::Debug for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSpec")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The modal is appearing.
    Enter,
    /// The modal is disappearing.
    Exit,
}

/// One invocation of a transition function.
pub struct TransitionRun {
    /// The region being transitioned.
    pub region: Region,
    /// The phase being run.
    pub phase: TransitionPhase,
    /// The spec's parameter object.
    pub params: TransitionParams,
    /// Shared completion state for this phase.
    completion: Rc<PhaseCompletion>,
    /// Whether this run already reported completion.
    finished: Cell<bool>,
}

impl TransitionRun {
    /// Report that this region's transition has finished. Idempotent per
    /// run; the phase's end boundary fires when the last region reports.
    pub fn finish(&self) {
        if self.finished.replace(true) {
            return;
        }
        self.completion.complete_one();
    }
}

/// Countdown shared by all regions started in one phase.
struct PhaseCompletion {
    /// Regions that have not reported completion yet.
    pending: Cell<usize>,
    /// Fired when `pending` reaches zero.
    on_end: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl PhaseCompletion {
    /// Decrement the pending count, firing the end callback at zero.
    fn complete_one(&self) {
        let left = self.pending.get().saturating_sub(1);
        self.pending.set(left);
        if left == 0
            && let Some(on_end) = self.on_end.borrow_mut().take()
        {
            on_end();
        }
    }
}

/// Sequences enter and exit transitions for one modal session.
#[derive(Debug, Clone, Default)]
pub struct TransitionController {
    /// Background region transition.
    background: Option<TransitionSpec>,
    /// Window region transition. Falls back to the background's when absent.
    window: Option<TransitionSpec>,
}

impl TransitionController {
    /// Build a controller from per-region specs.
    pub fn new(background: Option<TransitionSpec>, window: Option<TransitionSpec>) -> Self {
        Self { background, window }
    }

    /// Run one phase: invoke the configured transition functions for the
    /// background and window regions, and fire `on_end` once both report
    /// completion. With no functions configured, `on_end` fires
    /// synchronously.
    pub fn run(&self, phase: TransitionPhase, on_end: impl FnOnce() + 'static) {
        let window = self.window.as_ref().or(self.background.as_ref());
        let runs: Vec<(Region, TransitionSpec)> = [
            (Region::Background, self.background.as_ref()),
            (Region::Window, window),
        ]
        .into_iter()
        .filter_map(|(region, spec)| spec.map(|s| (region, s.clone())))
        .collect();

        if runs.is_empty() {
            on_end();
            return;
        }

        let completion = Rc::new(PhaseCompletion {
            pending: Cell::new(runs.len()),
            on_end: RefCell::new(Some(Box::new(on_end))),
        });
        for (region, spec) in runs {
            (spec.func)(TransitionRun {
                region,
                phase,
                params: spec.params,
                completion: completion.clone(),
                finished: Cell::new(false),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;

    #[test]
    fn no_transitions_end_synchronously() {
        let ended = Rc::new(Cell::new(false));
        let ended2 = ended.clone();
        TransitionController::default().run(TransitionPhase::Enter, move || ended2.set(true));
        assert!(ended.get());
    }

    #[test]
    fn window_falls_back_to_background_spec() {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let runs2 = runs.clone();
        let spec = TransitionSpec::with_params(
            Rc::new(move |run: TransitionRun| {
                runs2.borrow_mut().push((run.region, run.params.clone()));
                run.finish();
            }),
            json!({"duration": 300}),
        );

        let ended = Rc::new(Cell::new(false));
        let ended2 = ended.clone();
        TransitionController::new(Some(spec), None)
            .run(TransitionPhase::Enter, move || ended2.set(true));

        assert!(ended.get());
        let runs = runs.borrow();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, Region::Background);
        assert_eq!(runs[1].0, Region::Window);
        assert_eq!(runs[0].1, json!({"duration": 300}));
    }

    #[test]
    fn end_waits_for_both_regions() {
        let held: Rc<RefCell<Vec<TransitionRun>>> = Rc::new(RefCell::new(Vec::new()));
        let held2 = held.clone();
        let spec = TransitionSpec::new(Rc::new(move |run| held2.borrow_mut().push(run)));

        let ended = Rc::new(Cell::new(false));
        let ended2 = ended.clone();
        TransitionController::new(Some(spec), None)
            .run(TransitionPhase::Exit, move || ended2.set(true));

        assert!(!ended.get());
        held.borrow()[0].finish();
        assert!(!ended.get());
        held.borrow()[1].finish();
        assert!(ended.get());
    }

    #[test]
    fn duplicate_finish_is_idempotent() {
        let held: Rc<RefCell<Vec<TransitionRun>>> = Rc::new(RefCell::new(Vec::new()));
        let held2 = held.clone();
        let spec = TransitionSpec::new(Rc::new(move |run| held2.borrow_mut().push(run)));

        let ended = Rc::new(Cell::new(false));
        let ended2 = ended.clone();
        TransitionController::new(Some(spec), None)
            .run(TransitionPhase::Enter, move || ended2.set(true));

        held.borrow()[0].finish();
        held.borrow()[0].finish();
        assert!(!ended.get(), "one region finishing twice must not end the phase");
        held.borrow()[1].finish();
        assert!(ended.get());
    }
}
