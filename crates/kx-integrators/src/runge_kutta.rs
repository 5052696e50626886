//! Classical fourth-order Runge-Kutta integration.

use crate::Coord;
use kx_core::Real;

/// Advance `(t, x, v)` by one classical RK4 step.
///
/// `accel` computes the acceleration as a function of `(t, x, v)`, so the
/// force may depend on velocity or explicitly on time, which the
/// symplectic steppers cannot express. Four stage evaluations at `t`,
/// `t + dt/2` (twice) and `t + dt`, combined with weights 1, 2, 2, 1 / 6.
///
/// Fourth-order accurate but not symplectic: over very long runs the
/// energy drifts slowly. The trade-off buys generality and is the stepper
/// of choice for the relativistic (velocity-dependent) models.
pub fn runge_kutta4<C, F>(dt: Real, t: Real, x: C, v: C, mut accel: F) -> (Real, C, C)
where
    C: Coord,
    F: FnMut(Real, C, C) -> C,
{
    let k1v = accel(t, x, v) * dt;
    let k1x = v * dt;

    let k2v = accel(t + 0.5 * dt, x + k1x * 0.5, v + k1v * 0.5) * dt;
    let k2x = (v + k1v * 0.5) * dt;

    let k3v = accel(t + 0.5 * dt, x + k2x * 0.5, v + k2v * 0.5) * dt;
    let k3x = (v + k2v * 0.5) * dt;

    let k4v = accel(t + dt, x + k3x, v + k3v) * dt;
    let k4x = (v + k3v) * dt;

    let t_next = t + dt;
    let x_next = x + (k1x + (k2x + k3x) * 2.0 + k4x) * (1.0 / 6.0);
    let v_next = v + (k1v + (k2v + k3v) * 2.0 + k4v) * (1.0 / 6.0);

    (t_next, x_next, v_next)
}
