//! kx-core: stable foundation for kinetix.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{KxError, KxResult};
pub use numeric::*;
