//! Interactive and headless run loops.

use crate::canvas::{Canvas, ScreenTransform};
use crate::clock::{DrawPacer, StepClock};
use crate::error::{SimError, SimResult};
use crate::events::ControlEvent;
use crate::sim::{Simulate, StateVec};
use kx_core::Real;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Options for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOptions {
    /// Fixed physics step (seconds of simulated time).
    pub dt: Real,
    /// Wall-clock-to-simulated-time multiplier.
    pub time_scale: Real,
    /// Step budget per catch-up (runaway safety limit).
    pub max_steps: usize,
    /// Draw cadence for interactive runs.
    pub draw_hz: Real,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            time_scale: 1.0,
            max_steps: 100_000,
            draw_hz: 60.0,
        }
    }
}

/// Ordered sequence of state snapshots from a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct Trajectory {
    pub labels: Vec<String>,
    pub states: Vec<StateVec>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Write as CSV, one snapshot per row. Falls back to `c0, c1, ..`
    /// column names when the model does not label its state.
    pub fn write_csv<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        if !self.labels.is_empty() {
            writeln!(w, "{}", self.labels.join(","))?;
        } else if let Some(first) = self.states.first() {
            let header: Vec<String> = (0..first.len()).map(|i| format!("c{i}")).collect();
            writeln!(w, "{}", header.join(","))?;
        }
        for row in &self.states {
            let cells: Vec<String> = row.iter().map(|v| format!("{v}")).collect();
            writeln!(w, "{}", cells.join(","))?;
        }
        Ok(())
    }
}

/// Run `sim` from `t = 0` to `t = duration` at a fixed step with no wall
/// clock or rendering involved: fully deterministic given the inputs.
///
/// Returns the initial snapshot plus one per step, so exactly
/// `floor(duration / dt) + 1` records. A failed `update` aborts the run
/// and propagates; the partial trajectory is discarded here, the caller
/// never sees half a run.
pub fn run_headless(sim: &mut dyn Simulate, duration: Real, dt: Real) -> SimResult<Trajectory> {
    let dt = kx_core::ensure_positive(dt, "dt must be positive")?;
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(SimError::InvalidArg { what: "duration must be non-negative" });
    }

    // The IEEE quotient of an exact decimal multiple can land just below
    // the integer (0.3 / 0.1 == 2.999..), which would lose the final
    // step. Nudge by a relative epsilon before truncating.
    let steps = ((duration / dt) * (1.0 + 1e-9)).floor() as usize;
    info!(duration, dt, steps, "starting headless run");

    let labels = sim.state_labels().iter().map(|s| s.to_string()).collect();
    let mut states = Vec::with_capacity(steps + 1);
    states.push(sim.state());

    for _ in 0..steps {
        sim.update(dt)?;
        states.push(sim.state());
    }

    debug!(records = states.len(), "headless run complete");
    Ok(Trajectory { labels, states })
}

/// An interactive surface: a canvas plus frame lifecycle and input.
///
/// Implemented by the UI over its painter; tests drive the runner with a
/// scripted implementation.
pub trait Surface: Canvas {
    /// Clear and prepare for a frame.
    fn begin_frame(&mut self);
    /// Present the finished frame.
    fn present(&mut self);
    /// Drain pending control input (non-blocking).
    fn poll_events(&mut self) -> Vec<ControlEvent>;
    /// Cooperative termination signal, observed at iteration start only.
    fn quit_requested(&self) -> bool;
}

/// Interactive runner: owns the wall-clock sampling, the fixed-step
/// clock, the draw cadence, and the screen transform.
#[derive(Debug, Clone)]
pub struct Runner {
    pub transform: ScreenTransform,
    pub opts: RunOptions,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            transform: ScreenTransform::default(),
            opts: RunOptions::default(),
        }
    }
}

impl Runner {
    /// Drive `sim` against `surface` in real time until the surface
    /// requests termination.
    ///
    /// Per iteration: poll termination, deliver input events, advance the
    /// fixed-step clock to `elapsed * time_scale`, then draw at the
    /// throttled cadence. All updates of an iteration complete strictly
    /// before its draw. Update errors abort the loop and propagate.
    pub fn run<S: Surface>(&self, sim: &mut dyn Simulate, surface: &mut S) -> SimResult<()> {
        let mut clock = StepClock::new(self.opts.dt)?;
        let mut pacer = DrawPacer::from_hz(self.opts.draw_hz);
        let start = Instant::now();

        info!(
            dt = self.opts.dt,
            time_scale = self.opts.time_scale,
            draw_hz = self.opts.draw_hz,
            "starting interactive run"
        );

        loop {
            if surface.quit_requested() {
                break;
            }

            for event in surface.poll_events() {
                sim.handle_event(&event);
            }

            let now = start.elapsed().as_secs_f64();
            clock.catch_up(sim, now * self.opts.time_scale, self.opts.max_steps)?;

            if pacer.due(now) {
                surface.begin_frame();
                sim.draw(surface);
                surface.present();
            }

            // Idle briefly so the loop does not peg a core while waiting
            // for the next step to come due.
            std::thread::sleep(Duration::from_micros(250));
        }

        info!(steps = clock.steps(), sim_time = clock.elapsed(), "interactive run stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Primitive, RecordingCanvas};
    use nalgebra::Vector2;

    /// Free particle; exact trajectory x = x0 + v t.
    struct Drifter {
        t: Real,
        x: Real,
        v: Real,
    }

    impl Simulate for Drifter {
        fn update(&mut self, dt: Real) -> SimResult<()> {
            self.t += dt;
            self.x += self.v * dt;
            Ok(())
        }

        fn state(&self) -> StateVec {
            vec![self.t, self.x, self.v]
        }

        fn state_labels(&self) -> &'static [&'static str] {
            &["t", "x", "v"]
        }

        fn draw(&self, canvas: &mut dyn Canvas) {
            canvas.draw_point(Vector2::new(self.x, 0.0));
        }
    }

    fn drifter() -> Drifter {
        Drifter {
            t: 0.0,
            x: 1.0,
            v: 2.0,
        }
    }

    #[test]
    fn headless_returns_floor_plus_one_records() {
        let mut sim = drifter();
        let traj = run_headless(&mut sim, 1.0, 1e-3).unwrap();
        assert_eq!(traj.len(), 1001);

        let mut sim = drifter();
        let traj = run_headless(&mut sim, 0.0105, 1e-2).unwrap();
        assert_eq!(traj.len(), 2);

        // Exact multiple whose float quotient rounds just below 3
        let mut sim = drifter();
        let traj = run_headless(&mut sim, 0.3, 0.1).unwrap();
        assert_eq!(traj.len(), 4);

        let mut sim = drifter();
        let traj = run_headless(&mut sim, 0.0, 1e-3).unwrap();
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn headless_runs_are_deterministic() {
        let mut a = drifter();
        let mut b = drifter();
        let ta = run_headless(&mut a, 1.0, 1e-3).unwrap();
        let tb = run_headless(&mut b, 1.0, 1e-3).unwrap();
        assert_eq!(ta.states, tb.states);
    }

    #[test]
    fn headless_rejects_bad_arguments() {
        let mut sim = drifter();
        assert!(run_headless(&mut sim, 1.0, 0.0).is_err());
        assert!(run_headless(&mut sim, -1.0, 1e-3).is_err());
        assert!(run_headless(&mut sim, Real::NAN, 1e-3).is_err());
    }

    #[test]
    fn headless_propagates_update_errors() {
        struct Broken;
        impl Simulate for Broken {
            fn update(&mut self, _dt: Real) -> SimResult<()> {
                Err(SimError::NotImplemented { what: "update" })
            }
            fn state(&self) -> StateVec {
                vec![]
            }
        }
        let err = run_headless(&mut Broken, 1.0, 1e-3).unwrap_err();
        assert!(matches!(err, SimError::NotImplemented { .. }));
    }

    #[test]
    fn csv_export_includes_labels_and_rows() {
        let mut sim = drifter();
        let traj = run_headless(&mut sim, 0.002, 1e-3).unwrap();
        let mut out = Vec::new();
        traj.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("t,x,v"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn trajectory_serializes_to_json() {
        let mut sim = drifter();
        let traj = run_headless(&mut sim, 0.002, 1e-3).unwrap();
        let json = serde_json::to_string(&traj).unwrap();
        assert!(json.contains("\"labels\""));
        assert!(json.contains("\"states\""));
    }

    /// Scripted surface: quits after a fixed number of polls and delivers
    /// a thrust event on the first one.
    struct ScriptedSurface {
        canvas: RecordingCanvas,
        polls: usize,
        quit_after: usize,
        frames: usize,
    }

    impl Canvas for ScriptedSurface {
        fn draw_point(&mut self, at: Vector2<Real>) {
            self.canvas.draw_point(at);
        }
        fn draw_line(&mut self, from: Vector2<Real>, to: Vector2<Real>) {
            self.canvas.draw_line(from, to);
        }
        fn draw_text(&mut self, at: Vector2<Real>, text: &str) {
            self.canvas.draw_text(at, text);
        }
    }

    impl Surface for ScriptedSurface {
        fn begin_frame(&mut self) {
            self.frames += 1;
        }
        fn present(&mut self) {}
        fn poll_events(&mut self) -> Vec<ControlEvent> {
            self.polls += 1;
            if self.polls == 1 {
                vec![ControlEvent::Halt]
            } else {
                vec![]
            }
        }
        fn quit_requested(&self) -> bool {
            self.polls >= self.quit_after
        }
    }

    #[test]
    fn interactive_run_stops_on_quit_and_draws() {
        let runner = Runner::default();
        let mut sim = drifter();
        let mut surface = ScriptedSurface {
            canvas: RecordingCanvas::default(),
            polls: 0,
            quit_after: 5,
            frames: 0,
        };

        runner.run(&mut sim, &mut surface).unwrap();

        assert_eq!(surface.polls, 5);
        assert!(surface.frames >= 1);
        assert!(
            surface
                .canvas
                .primitives
                .iter()
                .any(|p| matches!(p, Primitive::Point(_)))
        );
    }
}
