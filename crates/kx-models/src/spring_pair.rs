//! Two masses coupled by a spring on a line: velocity Verlet on
//! positions/velocities, and a phase-space leapfrog variant on momenta.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::{leapfrog, velocity_verlet};
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

/// Spring force on both particles; `x` holds the two positions. The
/// vector coordinate goes through the integrator element-wise, exactly
/// like a scalar would.
fn accel(x: Vector2<Real>, k: Real, rest: Real, m: Vector2<Real>) -> Vector2<Real> {
    let stretch = x.x - x.y + rest;
    Vector2::new(-k * stretch / m.x, k * stretch / m.y)
}

/// Two particles joined by a spring of rest length `rest` and stiffness
/// `k`, free to move along one axis. Demonstrates array-shaped
/// coordinates flowing through the scalar steppers.
#[derive(Debug, Clone)]
pub struct SpringPair {
    t: Real,
    x: Vector2<Real>,
    v: Vector2<Real>,
    a: Vector2<Real>,
    m: Vector2<Real>,
    rest: Real,
    k: Real,
    iters: u64,
}

impl SpringPair {
    pub fn new(x0: Vector2<Real>, v0: Vector2<Real>, m: Vector2<Real>, rest: Real, k: Real) -> Self {
        Self {
            t: 0.0,
            x: x0,
            v: v0,
            a: accel(x0, k, rest, m),
            m,
            rest,
            k,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        0.5 * self.m.x * self.v.x * self.v.x + 0.5 * self.m.y * self.v.y * self.v.y
    }

    pub fn potential(&self) -> Real {
        let stretch = self.x.y - self.x.x - self.rest;
        0.5 * self.k * stretch * stretch
    }
}

impl Default for SpringPair {
    fn default() -> Self {
        Self::new(
            Vector2::new(-5.0, -2.0),
            Vector2::new(0.1, 0.0),
            Vector2::new(0.5, 0.5),
            1.5,
            20.0,
        )
    }
}

impl Simulate for SpringPair {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, rest, m) = (self.k, self.rest, self.m);
        (self.t, self.x, self.v, self.a) =
            velocity_verlet(dt, self.t, self.x, self.v, self.a, |_, x, _| {
                accel(x, k, rest, m)
            });

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "spring pair");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![
            self.t,
            self.x.x,
            self.x.y,
            self.v.x,
            self.v.y,
            kinetic,
            potential,
            kinetic + potential,
        ]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "x0", "x1", "v0", "v1", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let a = Vector2::new(self.x.x, 0.0);
        let b = Vector2::new(self.x.y, 0.0);
        canvas.draw_line(a, b);
        canvas.draw_point(a);
        canvas.draw_point(b);
    }
}

/// The same pair on `(x, p)` with `p_i = m_i v_i`, stepped with leapfrog;
/// the spring force is equal and opposite, so the kick leaves the total
/// momentum exactly unchanged.
#[derive(Debug, Clone)]
pub struct PhaseSpringPair {
    t: Real,
    x: Vector2<Real>,
    p: Vector2<Real>,
    m: Vector2<Real>,
    rest: Real,
    k: Real,
    iters: u64,
}

impl PhaseSpringPair {
    pub fn new(x0: Vector2<Real>, v0: Vector2<Real>, m: Vector2<Real>, rest: Real, k: Real) -> Self {
        Self {
            t: 0.0,
            x: x0,
            p: m.component_mul(&v0),
            m,
            rest,
            k,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        0.5 * self.p.x * self.p.x / self.m.x + 0.5 * self.p.y * self.p.y / self.m.y
    }

    pub fn potential(&self) -> Real {
        let stretch = self.x.y - self.x.x - self.rest;
        0.5 * self.k * stretch * stretch
    }
}

impl Default for PhaseSpringPair {
    fn default() -> Self {
        Self::new(
            Vector2::new(-5.0, -2.0),
            Vector2::new(0.1, 0.0),
            Vector2::new(0.5, 0.5),
            1.5,
            20.0,
        )
    }
}

impl Simulate for PhaseSpringPair {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, rest, m) = (self.k, self.rest, self.m);
        (self.t, self.x, self.p) = leapfrog(
            dt,
            self.t,
            self.x,
            self.p,
            |p: Vector2<Real>| p.component_div(&m),
            |x: Vector2<Real>| {
                let stretch = x.x - x.y + rest;
                Vector2::new(-k * stretch, k * stretch)
            },
        );

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "phase spring pair");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![
            self.t,
            self.x.x,
            self.x.y,
            self.p.x,
            self.p.y,
            kinetic,
            potential,
            kinetic + potential,
        ]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "x0", "x1", "p0", "p1", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        // Spatial dots on the axis plus the per-particle phase points
        canvas.draw_point(Vector2::new(self.x.x, 0.0));
        canvas.draw_point(Vector2::new(self.x.y, 0.0));
        canvas.draw_point(Vector2::new(self.x.x, self.p.x));
        canvas.draw_point(Vector2::new(self.x.y, self.p.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_bounded_and_momentum_conserved() {
        let mut sim = SpringPair::default();
        let e0 = sim.kinetic() + sim.potential();
        let p0 = sim.m.x * sim.v.x + sim.m.y * sim.v.y;

        for _ in 0..10_000 {
            sim.update(1e-3).unwrap();
        }

        let e = sim.kinetic() + sim.potential();
        let p = sim.m.x * sim.v.x + sim.m.y * sim.v.y;
        assert!((e - e0).abs() < 1e-2 * e0.abs().max(1.0));
        assert!((p - p0).abs() < 1e-9, "momentum drifted: {}", p - p0);
    }

    #[test]
    fn center_of_mass_moves_uniformly() {
        let mut sim = SpringPair::default();
        let com0 = 0.5 * (sim.x.x + sim.x.y);
        let vcom = 0.5 * (sim.v.x + sim.v.y);

        for _ in 0..5000 {
            sim.update(1e-3).unwrap();
        }
        let com = 0.5 * (sim.x.x + sim.x.y);
        assert!(kx_core::nearly_equal(
            com,
            com0 + vcom * sim.t,
            kx_core::Tolerances { abs: 1e-9, rel: 1e-9 }
        ));
    }

    #[test]
    fn rest_configuration_stays_at_rest() {
        let mut sim = SpringPair::new(
            Vector2::new(0.0, 1.5),
            Vector2::new(0.0, 0.0),
            Vector2::new(0.5, 0.5),
            1.5,
            20.0,
        );
        for _ in 0..1000 {
            sim.update(1e-3).unwrap();
        }
        assert!((sim.x.x).abs() < 1e-12);
        assert!((sim.x.y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn phase_pair_energy_bounded_and_momentum_exact() {
        let mut sim = PhaseSpringPair::default();
        let e0 = sim.kinetic() + sim.potential();
        let p0 = sim.p.x + sim.p.y;

        for _ in 0..10_000 {
            sim.update(1e-3).unwrap();
        }

        let e = sim.kinetic() + sim.potential();
        assert!((e - e0).abs() < 1e-2 * e0.abs().max(1.0));
        // The kick applies equal-and-opposite impulses, so the sum is
        // preserved to rounding.
        assert!((sim.p.x + sim.p.y - p0).abs() < 1e-12);
    }

    #[test]
    fn phase_pair_momentum_is_mass_times_velocity() {
        let sim = PhaseSpringPair::default();
        assert!((sim.p.x - 0.05).abs() < 1e-15);
        assert!(sim.p.y.abs() < 1e-15);
    }
}
