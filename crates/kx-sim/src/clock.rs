//! Fixed-step clock and draw pacing.
//!
//! The physics rate and the draw rate are deliberately decoupled: physics
//! fidelity needs a small fixed `dt`, rendering only needs ~60 Hz. The
//! clock maps an externally sampled target time onto whole fixed steps,
//! so a paused and resumed process catches up through all the missed
//! steps instead of taking one huge inaccurate one.

use crate::error::SimResult;
use crate::sim::Simulate;
use kx_core::{Real, ensure_positive};
use tracing::warn;

/// Simulated-time accumulator over a fixed step.
///
/// The accumulator only ever moves forward. Models that carry their own
/// time-direction flag keep that bookkeeping internal; it never flows
/// back into this clock.
#[derive(Debug, Clone)]
pub struct StepClock {
    dt: Real,
    accumulator: Real,
    steps: u64,
}

impl StepClock {
    pub fn new(dt: Real) -> SimResult<Self> {
        let dt = ensure_positive(dt, "dt must be positive")?;
        Ok(Self {
            dt,
            accumulator: 0.0,
            steps: 0,
        })
    }

    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Simulated time advanced so far.
    pub fn elapsed(&self) -> Real {
        self.accumulator
    }

    /// Total fixed steps taken.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Step `sim` forward until the accumulator reaches `target`,
    /// returning the number of steps taken. A failed `update` aborts the
    /// catch-up immediately; no retry, no partial recovery.
    ///
    /// `max_steps` bounds one catch-up so a stalled or badly scaled clock
    /// cannot wedge the loop; hitting it leaves the remaining deficit for
    /// the next iteration.
    pub fn catch_up(
        &mut self,
        sim: &mut dyn Simulate,
        target: Real,
        max_steps: usize,
    ) -> SimResult<usize> {
        let mut taken = 0;
        while self.accumulator < target {
            if taken >= max_steps {
                warn!(
                    target_time = target,
                    reached = self.accumulator,
                    max_steps,
                    "catch-up step budget exhausted; deferring remainder"
                );
                break;
            }
            sim.update(self.dt)?;
            self.accumulator += self.dt;
            self.steps += 1;
            taken += 1;
        }
        Ok(taken)
    }
}

/// Throttles draw calls to a fixed cadence, independent of how many
/// physics steps each iteration runs. Between due times nothing is drawn
/// and the last frame simply stays on screen.
#[derive(Debug, Clone)]
pub struct DrawPacer {
    period: Real,
    next_due: Real,
}

impl DrawPacer {
    pub fn from_hz(hz: Real) -> Self {
        let period = if hz > 0.0 { 1.0 / hz } else { 0.0 };
        Self {
            period,
            next_due: 0.0,
        }
    }

    /// Whether a draw is due at wall-clock time `now` (seconds since run
    /// start). Advances the schedule when it fires.
    pub fn due(&mut self, now: Real) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
}
