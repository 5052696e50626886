//! Fixed-step integrators for second-order dynamical systems.
//!
//! Every stepper here is a pure function: all state threads through the
//! arguments and return values, and the derivative is supplied by the
//! caller. The same code handles scalar and fixed-size vector coordinates
//! through the [`Coord`] bound, which applies the arithmetic element-wise.
//!
//! None of the steppers validate `dt` or guard against NaN/infinity; a
//! non-finite input produces a non-finite output and keeps going. Callers
//! that want a hard check can use `kx_core::ensure_finite` on the results.

pub mod coord;
mod euler;
mod leapfrog;
mod runge_kutta;
mod verlet;

pub use coord::Coord;
pub use euler::explicit_euler;
pub use leapfrog::leapfrog;
pub use runge_kutta::runge_kutta4;
pub use verlet::velocity_verlet;
