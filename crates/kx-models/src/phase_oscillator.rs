//! Harmonic oscillators in phase space, leapfrog.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_integrators::leapfrog;
use kx_sim::{Canvas, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

/// The same oscillator as [`crate::Oscillator`], formulated on `(q, p)`
/// and stepped with the symplectic leapfrog. Drawing it traces the phase
/// portrait (an ellipse) instead of the spatial motion.
#[derive(Debug, Clone)]
pub struct PhaseOscillator {
    t: Real,
    q: Real,
    p: Real,
    m: Real,
    k: Real,
    iters: u64,
}

impl PhaseOscillator {
    pub fn new(t0: Real, x0: Real, v0: Real, m: Real, k: Real) -> Self {
        Self {
            t: t0,
            q: x0,
            p: m * v0,
            m,
            k,
            iters: 0,
        }
    }

    pub fn kinetic(&self) -> Real {
        0.5 * self.p * self.p / self.m
    }

    pub fn potential(&self) -> Real {
        0.5 * self.k * self.q * self.q
    }
}

impl Default for PhaseOscillator {
    fn default() -> Self {
        Self::new(0.0, 2.0, 0.0, 0.25, 4.0)
    }
}

impl Simulate for PhaseOscillator {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, m) = (self.k, self.m);
        (self.t, self.q, self.p) =
            leapfrog(dt, self.t, self.q, self.p, |p| p / m, |q| -k * q);

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "phase oscillator");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![self.t, self.q, self.p, kinetic, potential, kinetic + potential]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "q", "p", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_point(Vector2::new(self.q, self.p));
    }
}

/// Relativistic oscillator on `(x, p)` with the Hamiltonian
/// `H = sqrt(m^2 + p^2) - m + k x^2 / 2` (c = 1).
///
/// Splitting on canonical momentum keeps the force position-only and the
/// velocity momentum-only, so leapfrog applies and the energy error stays
/// in a bounded band, unlike the RK4 treatment in
/// [`crate::RelativisticOscillator`]. The coordinate velocity
/// `p / sqrt(m^2 + p^2)` is structurally below c for any finite momentum.
#[derive(Debug, Clone)]
pub struct RelativisticPhaseOscillator {
    t: Real,
    x: Real,
    p: Real,
    m: Real,
    k: Real,
    iters: u64,
}

impl RelativisticPhaseOscillator {
    pub fn new(t0: Real, x0: Real, v0: Real, m: Real, k: Real) -> Self {
        Self {
            t: t0,
            x: x0,
            p: m * v0 / (1.0 - v0 * v0).sqrt(),
            m,
            k,
            iters: 0,
        }
    }

    /// Relativistic kinetic energy `sqrt(m^2 + p^2) - m`.
    pub fn kinetic(&self) -> Real {
        (self.m * self.m + self.p * self.p).sqrt() - self.m
    }

    pub fn potential(&self) -> Real {
        0.5 * self.k * self.x * self.x
    }

    /// Coordinate velocity `dx/dt = p / sqrt(m^2 + p^2)`.
    pub fn coordinate_velocity(&self) -> Real {
        self.p / (self.m * self.m + self.p * self.p).sqrt()
    }
}

impl Default for RelativisticPhaseOscillator {
    fn default() -> Self {
        Self::new(0.0, 2.0, 0.0, 0.25, 4.0)
    }
}

impl Simulate for RelativisticPhaseOscillator {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        let (k, m) = (self.k, self.m);
        (self.t, self.x, self.p) = leapfrog(
            dt,
            self.t,
            self.x,
            self.p,
            |p| p / (m * m + p * p).sqrt(),
            |q| -k * q,
        );

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, energy = self.kinetic() + self.potential(), "sr phase oscillator");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        let (kinetic, potential) = (self.kinetic(), self.potential());
        vec![self.t, self.x, self.p, kinetic, potential, kinetic + potential]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "x", "p", "kinetic", "potential", "total"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        // Momentum compressed to keep the relativistic ellipse on screen
        canvas.draw_point(Vector2::new(self.x, self.p / 5.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_space_energy_stays_bounded() {
        let mut sim = PhaseOscillator::default();
        let e0 = sim.kinetic() + sim.potential();
        let mut max_err: Real = 0.0;
        for _ in 0..10_000 {
            sim.update(1e-3).unwrap();
            max_err = max_err.max((sim.kinetic() + sim.potential() - e0).abs());
        }
        assert!(max_err < 1e-3);
    }

    #[test]
    fn momentum_is_mass_times_velocity_at_construction() {
        let sim = PhaseOscillator::new(0.0, 1.0, 3.0, 0.5, 2.0);
        let s = sim.state();
        assert!((s[2] - 1.5).abs() < 1e-15);
    }

    #[test]
    fn relativistic_energy_stays_bounded_despite_large_momentum() {
        // Default turning point stores E = 8; at the bottom the momentum
        // reaches ~8.25 and the motion is highly relativistic.
        let mut sim = RelativisticPhaseOscillator::default();
        let e0 = sim.kinetic() + sim.potential();
        let mut max_err: Real = 0.0;
        for _ in 0..10_000 {
            sim.update(1e-3).unwrap();
            max_err = max_err.max((sim.kinetic() + sim.potential() - e0).abs());
        }
        assert!(max_err < 1e-2, "energy drifted by {max_err}");
    }

    #[test]
    fn relativistic_momentum_carries_the_gamma_factor() {
        // p = m v gamma: 1 * 0.6 / 0.8 = 0.75
        let sim = RelativisticPhaseOscillator::new(0.0, 0.0, 0.6, 1.0, 1.0);
        assert!((sim.p - 0.75).abs() < 1e-12);
    }

    #[test]
    fn coordinate_velocity_is_structurally_subluminal() {
        let mut sim = RelativisticPhaseOscillator::default();
        for _ in 0..20_000 {
            sim.update(1e-3).unwrap();
            assert!(sim.coordinate_velocity().abs() < 1.0);
        }
    }
}
