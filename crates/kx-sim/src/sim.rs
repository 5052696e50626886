//! The contract every physical model satisfies.

use crate::canvas::Canvas;
use crate::error::SimResult;
use crate::events::ControlEvent;
use kx_core::Real;

/// Ordered state snapshot: `[t, coords.., velocities.., energies..]`.
///
/// The layout is model-defined but fixed for the life of a model instance;
/// [`Simulate::state_labels`] names the columns for export.
pub type StateVec = Vec<Real>;

/// Trait for pluggable physical models.
///
/// Models own their state exclusively. The runner only ever triggers
/// `update`, it never reaches into the state, and within one scheduler
/// iteration every queued `update` completes before `draw` runs.
pub trait Simulate {
    /// Advance internal state by exactly one fixed step of `dt`, using a
    /// single integrator call. No side effects beyond the state mutation
    /// (and diagnostic logging). Errors propagate; the runner never
    /// retries a failed step.
    fn update(&mut self, dt: Real) -> SimResult<()>;

    /// Immutable snapshot of the observable state. Must not mutate.
    fn state(&self) -> StateVec;

    /// Column names for `state()`, used for trajectory export headers.
    fn state_labels(&self) -> &'static [&'static str] {
        &[]
    }

    /// Render the model onto `canvas` in simulation coordinates.
    /// Pure side effect; must not mutate simulation state.
    fn draw(&self, canvas: &mut dyn Canvas) {
        let _ = canvas;
    }

    /// Optional control input hook. Mutates only the control subset of
    /// state (thrust, frame flags); always delivered before `update`
    /// within the same scheduler iteration.
    fn handle_event(&mut self, event: &ControlEvent) {
        let _ = event;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    // A model stub may decline to implement update; the error is fatal
    // and surfaces unchanged.
    struct Unfinished;

    impl Simulate for Unfinished {
        fn update(&mut self, _dt: Real) -> SimResult<()> {
            Err(SimError::NotImplemented { what: "update" })
        }

        fn state(&self) -> StateVec {
            vec![]
        }
    }

    #[test]
    fn unimplemented_update_surfaces_as_error() {
        let mut sim = Unfinished;
        let err = sim.update(1e-3).unwrap_err();
        assert!(matches!(err, SimError::NotImplemented { what: "update" }));
    }

    #[test]
    fn default_hooks_are_no_ops() {
        let mut sim = Unfinished;
        sim.handle_event(&ControlEvent::Halt);
        let mut canvas = crate::canvas::NullCanvas;
        sim.draw(&mut canvas);
    }
}
