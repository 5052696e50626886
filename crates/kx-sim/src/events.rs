//! Control input delivered to interactive models.

use kx_core::Real;

/// A control input event, delivered to [`crate::Simulate::handle_event`]
/// before the iteration's updates run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Signed thrust demand in [-1, 1]; 0 releases the control.
    Accelerate(Real),
    /// Zero the controlled velocity immediately.
    Halt,
    /// Toggle which reference frame the wall clock is matched to
    /// (relativistic worldline models only).
    ToggleFrameLock,
}
