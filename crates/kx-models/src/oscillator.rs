//! 1-D harmonic oscillator, velocity Verlet.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::velocity_verlet;
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

fn accel(x: Real, k: Real, m: Real) -> Real {
    -(k / m) * x
}

/// Mass on a linear spring: `x'' = -(k/m) x`.
///
/// The reference model for the conservation tests; with the default
/// parameters the total energy is exactly 8.
#[derive(Debug, Clone)]
pub struct Oscillator {
    t: Real,
    x: Real,
    v: Real,
    a: Real,
    m: Real,
    k: Real,
    iters: u64,
}

impl Oscillator {
    pub fn new(t0: Real, x0: Real, v0: Real, m: Real, k: Real) -> Self {
        Self {
            t: t0,
            x: x0,
            v: v0,
            a: accel(x0, k, m),
            m,
            k,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        0.5 * self.m * self.v * self.v
    }

    pub fn potential(&self) -> Real {
        0.5 * self.k * self.x * self.x
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(0.0, 2.0, 0.0, 0.25, 4.0)
    }
}

impl Simulate for Oscillator {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, m) = (self.k, self.m);
        (self.t, self.x, self.v, self.a) =
            velocity_verlet(dt, self.t, self.x, self.v, self.a, |_, x, _| accel(x, k, m));

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "oscillator");
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
