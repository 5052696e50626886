//! Explicit (forward) Euler integration.

use crate::Coord;
use kx_core::Real;

/// Advance `(t, x, v)` by one explicit Euler step.
///
/// First order and not symplectic; the energy of a conservative system
/// drifts secularly. Kept as the baseline the drift tests compare the
/// symplectic steppers against, and occasionally useful for quick checks
/// where accuracy does not matter.
pub fn explicit_euler<C, F>(dt: Real, t: Real, x: C, v: C, mut accel: F) -> (Real, C, C)
where
    C: Coord,
    F: FnMut(Real, C, C) -> C,
{
    let a = accel(t, x, v);
    (t + dt, x + v * dt, v + a * dt)
}
