use crate::KxError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinity at API boundaries.
///
/// The integrators themselves never call this; non-finite values propagate
/// silently through a step. This is for callers that want a hard check.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, KxError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(KxError::NonFinite { what, value: v })
    }
}

/// Reject zero or negative step sizes and durations.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, KxError> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(KxError::InvalidArg { what })
    }
}
