//! Element-wise coordinate arithmetic.

use core::ops::{Add, Mul};
use kx_core::Real;

/// Arithmetic a generalized coordinate must support for integration.
///
/// Covers `Real` itself as well as fixed-size `nalgebra` vectors, so a
/// stepper written once serves both a single oscillator and a vector of
/// coupled bodies. The shape of the coordinate never changes across a
/// step; the steppers only add and scale.
pub trait Coord: Copy + Add<Output = Self> + Mul<Real, Output = Self> {}

impl<T> Coord for T where T: Copy + Add<Output = Self> + Mul<Real, Output = Self> {}
