//! Relativistic 1-D oscillator, RK4, natural units (c = 1).

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::runge_kutta4;
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

fn accel(x: Real, v: Real, k: Real, m: Real) -> Real {
    -(k / m) * x * (1.0 - v * v).powf(1.5)
}

/// Harmonic oscillator with the special-relativistic equation of motion
/// `x'' = -(k/m) x (1 - v^2)^{3/2}`.
///
/// The force depends on velocity, which the symplectic steppers cannot
/// express, so this model uses RK4 and accepts its slow secular drift.
/// A superluminal initial velocity makes `(1 - v^2)` negative and the
/// fractional power NaN; the NaN propagates silently through subsequent
/// steps rather than raising an error.
#[derive(Debug, Clone)]
pub struct RelativisticOscillator {
    t: Real,
    x: Real,
    v: Real,
    m: Real,
    k: Real,
    iters: u64,
}

impl RelativisticOscillator {
    pub fn new(t0: Real, x0: Real, v0: Real, m: Real, k: Real) -> Self {
        Self {
            t: t0,
            x: x0,
            v: v0,
            m,
            k,
            iters: 0,
        }
    }

    /// Relativistic kinetic energy `m gamma - m`.
    pub fn kinetic(&self) -> Real {
        self.m / (1.0 - self.v * self.v).sqrt() - self.m
    }

    pub fn potential(&self) -> Real {
        0.5 * self.k * self.x * self.x
    }
}

impl Default for RelativisticOscillator {
    fn default() -> Self {
        Self::new(0.0, 2.0, 0.0, 0.25, 4.0)
    }
}

impl Simulate for RelativisticOscillator {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, m) = (self.k, self.m);
        (self.t, self.x, self.v) =
            runge_kutta4(dt, self.t, self.x, self.v, |_, x, v| accel(x, v, k, m));

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(
                t = self.t,
                kinetic = self.kinetic(),
                potential = self.potential(),
                "sr oscillator"
            );
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![self.t, self.x, self.v, kinetic, potential, kinetic + potential]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "x", "v", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_point(Vector2::new(self.x, 0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_stays_subluminal_from_rest() {
        let mut sim = RelativisticOscillator::default();
        for _ in 0..20_000 {
            sim.update(1e-3).unwrap();
            assert!(sim.v.abs() < 1.0, "v = {} exceeded c", sim.v);
        }
    }

    #[test]
    fn reduces_to_newtonian_at_low_speed() {
        // Tiny amplitude: relativistic correction is negligible, motion
        // matches x = x0 cos(omega t) with omega = sqrt(k/m) = 4.
        let mut sim = RelativisticOscillator::new(0.0, 1e-4, 0.0, 0.25, 4.0);
        for _ in 0..1000 {
            sim.update(1e-3).unwrap();
        }
        let expected = 1e-4 * (4.0 * sim.t).cos();
        assert!((sim.x - expected).abs() < 1e-9);
    }

    #[test]
    fn superluminal_input_propagates_nan_silently() {
        let mut sim = RelativisticOscillator::new(0.0, 2.0, 1.5, 0.25, 4.0);
        // No error is raised; the state just goes NaN.
        sim.update(1e-3).unwrap();
        assert!(sim.state().iter().any(|v| v.is_nan()));
    }
}
