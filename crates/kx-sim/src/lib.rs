//! Simulation harness: the model contract, the drawing surface
//! abstraction, and the fixed-step runner.
//!
//! Provides:
//! - [`Simulate`], the trait every physical model implements
//! - [`Canvas`] and [`ScreenTransform`], the rendering seam (models draw
//!   in simulation coordinates, the surface owns the pixel mapping)
//! - [`StepClock`] and [`DrawPacer`], which decouple the fixed physics
//!   step from the wall clock and from the draw cadence
//! - [`run_headless`] for deterministic batch trajectories and
//!   [`Runner`] for the interactive loop

pub mod canvas;
pub mod clock;
pub mod error;
pub mod events;
pub mod runner;
pub mod sim;

pub use canvas::{Canvas, NullCanvas, Primitive, RecordingCanvas, ScreenTransform};
pub use clock::{DrawPacer, StepClock};
pub use error::{SimError, SimResult};
pub use events::ControlEvent;
pub use runner::{RunOptions, Runner, Surface, Trajectory, run_headless};
pub use sim::{Simulate, StateVec};
