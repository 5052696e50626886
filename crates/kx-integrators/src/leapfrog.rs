//! Symplectic leapfrog integration in phase space.

use crate::Coord;
use kx_core::Real;

/// Advance `(t, q, p)` by one leapfrog (drift-kick-drift) step.
///
/// `velocity` maps momentum to `dq/dt` and `force` maps position to
/// `dp/dt`. Half a drift, a full kick at the midpoint, half a drift:
///
/// ```text
/// q_mid = q + velocity(p) * dt/2
/// p'    = p + force(q_mid) * dt
/// q'    = q_mid + velocity(p') * dt/2
/// ```
///
/// The map is symplectic, so phase-space area is preserved exactly and the
/// energy error oscillates in a bounded band however long the run,
/// independent of whether `velocity` and `force` are linear.
pub fn leapfrog<C, V, F>(dt: Real, t: Real, q: C, p: C, mut velocity: V, mut force: F) -> (Real, C, C)
where
    C: Coord,
    V: FnMut(C) -> C,
    F: FnMut(C) -> C,
{
    let q_mid = q + velocity(p) * (0.5 * dt);
    let p_next = p + force(q_mid) * dt;
    let q_next = q_mid + velocity(p_next) * (0.5 * dt);

    (t + dt, q_next, p_next)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Harmonic oscillator in phase space: H = p^2/2m + k q^2/2
    const M: Real = 0.25;
    const K: Real = 4.0;

    fn energy(q: Real, p: Real) -> Real {
        0.5 * p * p / M + 0.5 * K * q * q
    }

    fn step(dt: Real, t: Real, q: Real, p: Real) -> (Real, Real, Real) {
        leapfrog(dt, t, q, p, |p| p / M, |q| -K * q)
    }

    #[test]
    fn energy_stays_in_a_bounded_band() {
        let dt = 1e-3;
        let (mut t, mut q, mut p) = (0.0, 2.0, 0.0);
        let e0 = energy(q, p);

        let mut max_err: Real = 0.0;
        for _ in 0..100_000 {
            (t, q, p) = step(dt, t, q, p);
            max_err = max_err.max((energy(q, p) - e0).abs());
        }
        // O(dt^2) oscillation around e0 = 8, no growth
        assert!(max_err < 1e-3, "energy error {max_err} too large");
    }

    #[test]
    fn error_band_does_not_grow_with_step_count() {
        let dt = 1e-3;
        let (mut t, mut q, mut p) = (0.0, 2.0, 0.0);
        let e0 = energy(q, p);

        let mut band_early: Real = 0.0;
        let mut band_late: Real = 0.0;
        for i in 0..200_000 {
            (t, q, p) = step(dt, t, q, p);
            let err = (energy(q, p) - e0).abs();
            if i < 20_000 {
                band_early = band_early.max(err);
            } else if i >= 180_000 {
                band_late = band_late.max(err);
            }
        }
        // Symplectic: late amplitude comparable to early, not secular
        assert!(band_late < band_early * 1.5);
    }
}
