//! Velocity Verlet integration.

use crate::Coord;
use kx_core::Real;

/// Advance `(t, x, v, a)` by one velocity Verlet step.
///
/// `accel` computes the acceleration as a function of `(t, x, v)`. The
/// returned acceleration is the one evaluated at the new position; the
/// caller must feed it back in as `a` on the next step, so each step costs
/// a single `accel` evaluation.
///
/// Second-order accurate and time-reversible. For linear restoring forces
/// the energy error stays in a bounded band with no secular drift, which
/// is why this is the default stepper for the conservative models.
pub fn velocity_verlet<C, F>(
    dt: Real,
    t: Real,
    x: C,
    v: C,
    a: C,
    mut accel: F,
) -> (Real, C, C, C)
where
    C: Coord,
    F: FnMut(Real, C, C) -> C,
{
    let x_next = x + v * dt + a * (0.5 * dt * dt);
    let t_next = t + dt;
    let a_next = accel(t_next, x_next, v);
    let v_next = v + (a + a_next) * (0.5 * dt);

    (t_next, x_next, v_next, a_next)
}
