//! Planar double pendulum, RK4 over vector angle coordinates.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::runge_kutta4;
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

/// Bound parameters for the equations of motion.
#[derive(Debug, Clone, Copy)]
struct Params {
    m: Vector2<Real>,
    r: Vector2<Real>,
    g: Real,
}

/// Angular accelerations from the Euler-Lagrange equations of the planar
/// double pendulum, with angles measured from the downward vertical.
fn angular_accel(theta: Vector2<Real>, omega: Vector2<Real>, p: Params) -> Vector2<Real> {
    let m_sum = p.m.x + p.m.y;
    let r_prod = p.r.x * p.r.y;
    let delta = theta.x - theta.y;

    let dl_dtheta0 = -p.g * p.r.x * m_sum * theta.x.sin()
        - p.m.y * r_prod * omega.x * omega.y * delta.sin();
    let dl_dtheta1 = -p.g * p.r.y * p.m.y * theta.y.sin()
        + p.m.y * r_prod * omega.x * omega.y * delta.sin();

    let a = p.m.y * p.r.y * p.r.y;
    let b = p.m.y * r_prod;
    let c = delta.cos();
    let d = delta.sin();
    let e = m_sum * p.r.x * p.r.x;

    let alpha0 = (a * dl_dtheta0 - b * c * dl_dtheta1
        + d * (a * b * omega.y - b * b * c * omega.x) * (omega.x - omega.y))
        / (a * e - b * b * c * c);
    let alpha1 = (dl_dtheta1 - b * (alpha0 * c - omega.x * (omega.x - omega.y) * d)) / a;

    Vector2::new(alpha0, alpha1)
}

/// Chaotic double pendulum. The coupled, velocity-dependent equations of
/// motion rule out the cached-acceleration steppers, so this uses RK4.
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    t: Real,
    theta: Vector2<Real>,
    omega: Vector2<Real>,
    params: Params,
    iters: u64,
}

impl DoublePendulum {
    pub fn new(theta0: Vector2<Real>, omega0: Vector2<Real>, m: Vector2<Real>, r: Vector2<Real>, g: Real) -> Self {
        Self {
            t: 0.0,
            theta: theta0,
            omega: omega0,
            params: Params { m, r, g },
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        let p = self.params;
        0.5 * (p.m.x + p.m.y) * p.r.x * p.r.x * self.omega.x * self.omega.x
            + 0.5 * p.m.y * p.r.y * p.r.y * self.omega.y * self.omega.y
            + p.m.y * p.r.x * p.r.y * self.omega.x * self.omega.y * (self.theta.x - self.theta.y).cos()
    }

    pub fn potential(&self) -> Real {
        let p = self.params;
        -p.g * p.r.x * (p.m.x + p.m.y) * self.theta.x.cos()
            - p.g * p.r.y * p.m.y * self.theta.y.cos()
    }

    fn joints(&self) -> (Vector2<Real>, Vector2<Real>) {
        let p = self.params;
        let elbow = Vector2::new(p.r.x * self.theta.x.sin(), -p.r.x * self.theta.x.cos());
        let bob = elbow + Vector2::new(p.r.y * self.theta.y.sin(), -p.r.y * self.theta.y.cos());
        (elbow, bob)
    }
}

impl Default for DoublePendulum {
    fn default() -> Self {
        Self::new(
            Vector2::new(core::f64::consts::FRAC_PI_2, core::f64::consts::PI),
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
            9.8,
        )
    }
}

impl Simulate for DoublePendulum {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let params = self.params;
        (self.t, self.theta, self.omega) = runge_kutta4(
            dt,
            self.t,
            self.theta,
            self.omega,
            |_, theta, omega| angular_accel(theta, omega, params),
        );

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "double pendulum");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![
            self.t,
            self.theta.x,
            self.theta.y,
            self.omega.x,
            self.omega.y,
            kinetic,
            potential,
            kinetic + potential,
        ]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &[
            "t", "theta0", "theta1", "omega0", "omega1", "kinetic", "potential", "total",
        ]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let origin = Vector2::new(0.0, 0.0);
        let (elbow, bob) = self.joints();
        canvas.draw_line(origin, elbow);
        canvas.draw_line(elbow, bob);
        canvas.draw_point(origin);
        canvas.draw_point(elbow);
        canvas.draw_point(bob);
    }
}
