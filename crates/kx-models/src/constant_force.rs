//! Uniform-force models, Newtonian and special-relativistic.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::{runge_kutta4, velocity_verlet};
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

/// Particle under a constant force `-k` (gravity-like for `k > 0`,
/// thrust-like for `k < 0`), velocity Verlet.
#[derive(Debug, Clone)]
pub struct ConstantForce {
    t: Real,
    x: Real,
    v: Real,
    a: Real,
    m: Real,
    k: Real,
    iters: u64,
}

impl ConstantForce {
    pub fn new(t0: Real, x0: Real, v0: Real, m: Real, k: Real) -> Self {
        Self {
            t: t0,
            x: x0,
            v: v0,
            a: -(k / m),
            m,
            k,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        0.5 * self.m * self.v * self.v
    }

    pub fn potential(&self) -> Real {
        self.k * self.x
    }
}

impl Default for ConstantForce {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.25, -4.0)
    }
}

impl Simulate for ConstantForce {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, m) = (self.k, self.m);
        (self.t, self.x, self.v, self.a) =
            velocity_verlet(dt, self.t, self.x, self.v, self.a, |_, _, _| -(k / m));

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "constant force");
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

/// Constant proper force with the relativistic velocity falloff
/// `x'' = -(k/m)(1 - v^2)^{3/2}` (c = 1); the coordinate velocity
/// asymptotically approaches c instead of growing without bound. RK4.
#[derive(Debug, Clone)]
pub struct RelativisticConstantForce {
    t: Real,
    x: Real,
    v: Real,
    m: Real,
    k: Real,
    iters: u64,
}

impl RelativisticConstantForce {
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

    pub fn kinetic(&self) -> Real {
        let gamma_inv = (1.0 - self.v * self.v).sqrt();
        self.m * self.v * self.v / gamma_inv + self.m * (gamma_inv - 1.0)
    }

    pub fn potential(&self) -> Real {
        self.k * self.x
    }
}

impl Default for RelativisticConstantForce {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.25, -0.1)
    }
}

impl Simulate for RelativisticConstantForce {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, m) = (self.k, self.m);
        (self.t, self.x, self.v) = runge_kutta4(dt, self.t, self.x, self.v, |_, _, v| {
            -(k / m) * (1.0 - v * v).powf(1.5)
        });

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, v = self.v, "constant force (sr)");
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
