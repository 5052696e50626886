//! Long-run conservation behavior of the steppers on the reference
//! harmonic oscillator (x0=2, v0=0, m=0.25, k=4, E0=8).

use kx_core::Real;
use kx_integrators::{explicit_euler, leapfrog, velocity_verlet};

const M: Real = 0.25;
const K: Real = 4.0;
const E0: Real = 8.0;
const DT: Real = 1e-3;

fn accel(x: Real) -> Real {
    -(K / M) * x
}

fn energy(x: Real, v: Real) -> Real {
    0.5 * M * v * v + 0.5 * K * x * x
}

#[test]
fn verlet_energy_stays_in_band_for_ten_thousand_steps() {
    let (mut t, mut x, mut v) = (0.0, 2.0, 0.0);
    let mut a = accel(x);

    let mut max_err: Real = 0.0;
    for _ in 0..10_000 {
        (t, x, v, a) = velocity_verlet(DT, t, x, v, a, |_, x, _| accel(x));
        max_err = max_err.max((energy(x, v) - E0).abs());
    }
    assert!(max_err < 1e-3, "energy left the band: {max_err}");
}

#[test]
fn verlet_has_no_secular_drift_where_euler_does() {
    let steps = 50_000;

    let (mut t, mut x, mut v) = (0.0, 2.0, 0.0);
    let mut a = accel(x);
    for _ in 0..steps {
        (t, x, v, a) = velocity_verlet(DT, t, x, v, a, |_, x, _| accel(x));
    }
    let verlet_err = (energy(x, v) - E0).abs();

    let (mut t, mut x, mut v) = (0.0, 2.0, 0.0);
    for _ in 0..steps {
        (t, x, v) = explicit_euler(DT, t, x, v, |_, x, _| accel(x));
    }
    let euler_err = (energy(x, v) - E0).abs();

    assert!(verlet_err < 1e-3);
    assert!(
        euler_err > 100.0 * verlet_err,
        "euler should drift visibly: euler={euler_err}, verlet={verlet_err}"
    );
}

#[test]
fn leapfrog_matches_verlet_energy_behavior_in_phase_space() {
    let (mut t, mut q, mut p) = (0.0, 2.0, 0.0);
    let e0 = 0.5 * p * p / M + 0.5 * K * q * q;

    let mut max_err: Real = 0.0;
    for _ in 0..10_000 {
        (t, q, p) = leapfrog(DT, t, q, p, |p| p / M, |q| -K * q);
        max_err = max_err.max((0.5 * p * p / M + 0.5 * K * q * q - e0).abs());
    }
    assert!(max_err < 1e-3);
}
