//! Planar pendulum on the angle coordinate, velocity Verlet, plus its
//! phase-space reformulation on canonical angular momentum.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::{leapfrog, velocity_verlet};
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

fn angular_accel(theta: Real, g: Real, r: Real) -> Real {
    -(g / r) * theta.sin()
}

fn bob_position(theta: Real, r: Real) -> Vector2<Real> {
    Vector2::new(-r * theta.sin(), -r * theta.cos())
}

/// Rigid pendulum: `theta'' = -(g/R) sin(theta)`.
///
/// The restoring force is nonlinear, so unlike the oscillator there is no
/// closed-form energy to pin down; the tests check the bounded-band
/// property instead.
#[derive(Debug, Clone)]
pub struct Pendulum {
    t: Real,
    theta: Real,
    theta_dot: Real,
    theta_ddot: Real,
    m: Real,
    g: Real,
    r: Real,
    iters: u64,
}

impl Pendulum {
    pub fn new(theta0: Real, theta_dot0: Real, m: Real, g: Real, r: Real) -> Self {
        Self {
            t: 0.0,
            theta: theta0,
            theta_dot: theta_dot0,
            theta_ddot: angular_accel(theta0, g, r),
            m,
            g,
            r,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        0.5 * self.m * (self.r * self.theta_dot).powi(2)
    }

    pub fn potential(&self) -> Real {
        -self.m * self.g * self.r * self.theta.cos()
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::new(3.0, 0.0, 10.0, 9.8, 3.0)
    }
}

impl Simulate for Pendulum {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (g, r) = (self.g, self.r);
        (self.t, self.theta, self.theta_dot, self.theta_ddot) = velocity_verlet(
            dt,
            self.t,
            self.theta,
            self.theta_dot,
            self.theta_ddot,
            |_, theta, _| angular_accel(theta, g, r),
        );

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(
                t = self.t,
                kinetic = self.kinetic(),
                potential = self.potential(),
                "pendulum"
            );
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![
            self.t,
            self.theta,
            self.theta_dot,
            kinetic,
            potential,
            kinetic + potential,
        ]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "theta", "theta_dot", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let bob = bob_position(self.theta, self.r);
        canvas.draw_line(Vector2::new(0.0, 0.0), bob);
        canvas.draw_point(Vector2::new(0.0, 0.0));
        canvas.draw_point(bob);
    }
}

/// The same pendulum on `(theta, p)` with `p = m R^2 theta'`, stepped
/// with leapfrog: `theta' = p / (m R^2)`, `p' = -m g R sin(theta)`.
#[derive(Debug, Clone)]
pub struct PhasePendulum {
    t: Real,
    theta: Real,
    p: Real,
    m: Real,
    g: Real,
    r: Real,
    iters: u64,
}

impl PhasePendulum {
    pub fn new(theta0: Real, theta_dot0: Real, m: Real, g: Real, r: Real) -> Self {
        Self {
            t: 0.0,
            theta: theta0,
            p: m * r * r * theta_dot0,
            m,
            g,
            r,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        self.p * self.p / (2.0 * self.m * self.r * self.r)
    }

    pub fn potential(&self) -> Real {
        -self.m * self.g * self.r * self.theta.cos()
    }
}

impl Default for PhasePendulum {
    fn default() -> Self {
        Self::new(3.0, 0.0, 10.0, 9.8, 3.0)
    }
}

impl Simulate for PhasePendulum {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (m, g, r) = (self.m, self.g, self.r);
        (self.t, self.theta, self.p) = leapfrog(
            dt,
            self.t,
            self.theta,
            self.p,
            |p| p / (m * r * r),
            |theta: Real| -m * g * r * theta.sin(),
        );

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(
                t = self.t,
                kinetic = self.kinetic(),
                potential = self.potential(),
                "phase pendulum"
            );
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![
            self.t,
            self.theta,
            self.p,
            kinetic,
            potential,
            kinetic + potential,
        ]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "theta", "p", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_point(Vector2::new(0.0, 0.0));
        canvas.draw_point(bob_position(self.theta, self.r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_bounded_for_large_amplitude_swing() {
        let mut sim = Pendulum::default();
        let e0 = sim.kinetic() + sim.potential();
        let mut max_err: Real = 0.0;
        for _ in 0..10_000 {
            sim.update(1e-3).unwrap();
            max_err = max_err.max((sim.kinetic() + sim.potential() - e0).abs());
        }
        // e0 is O(100); the band scales with it
        assert!(max_err < 1e-2 * e0.abs().max(1.0), "drift {max_err}");
    }

    #[test]
    fn small_angle_period_matches_harmonic_limit() {
        // theta0 = 0.01 rad: period ~ 2 pi sqrt(R/g)
        let mut sim = Pendulum::new(0.01, 0.0, 1.0, 9.8, 3.0);
        let mut prev = sim.theta;
        let mut crossing = 0.0;
        for _ in 0..100_000 {
            sim.update(1e-3).unwrap();
            // First downward zero crossing is a quarter period
            if prev > 0.0 && sim.theta <= 0.0 {
                crossing = sim.t;
                break;
            }
            prev = sim.theta;
        }
        let quarter = 0.25 * core::f64::consts::TAU * (3.0f64 / 9.8).sqrt();
        assert!((crossing - quarter).abs() < 2e-3, "crossing at {crossing}");
    }

    #[test]
    fn bob_hangs_straight_down_at_zero_angle() {
        let p = bob_position(0.0, 3.0);
        assert!((p.x).abs() < 1e-15);
        assert!((p.y + 3.0).abs() < 1e-15);
    }

    #[test]
    fn phase_formulation_keeps_energy_in_band() {
        let mut sim = PhasePendulum::default();
        let e0 = sim.kinetic() + sim.potential();
        let mut max_err: Real = 0.0;
        for _ in 0..10_000 {
            sim.update(1e-3).unwrap();
            max_err = max_err.max((sim.kinetic() + sim.potential() - e0).abs());
        }
        assert!(max_err < 1e-2 * e0.abs().max(1.0), "drift {max_err}");
    }

    #[test]
    fn canonical_momentum_is_moment_of_inertia_times_rate() {
        // p = m R^2 theta' = 10 * 9 * 0.5
        let sim = PhasePendulum::new(1.0, 0.5, 10.0, 9.8, 3.0);
        assert!((sim.p - 45.0).abs() < 1e-12);
    }

    #[test]
    fn phase_pendulum_rests_at_equilibrium() {
        let mut sim = PhasePendulum::new(0.0, 0.0, 10.0, 9.8, 3.0);
        for _ in 0..1000 {
            sim.update(1e-3).unwrap();
        }
        assert!(sim.theta.abs() < 1e-12);
        assert!(sim.p.abs() < 1e-12);
    }
}
