//! Interactive worldline models: a controllable particle drawn on a
//! position/time diagram, in Galilean and special-relativistic flavors.
//!
//! These are the models that use the control-event hook: thrust from the
//! arrow keys, `Halt` from the space bar. The view is centered on the
//! player, so the drawing is done relative to the current `(x, t)`.

use crate::DIAG_EVERY;
use kx_core::Real;
use kx_sim::{Canvas, ControlEvent, SimResult, Simulate, StateVec};
use nalgebra::Vector2;
use tracing::debug;

const MAX_PATH_LEN: usize = 10_000;

/// Draw gridlines one simulation unit apart, offset so they scroll past
/// the player-centered view, plus the player's past path.
fn draw_diagram(canvas: &mut dyn Canvas, t: Real, x: Real, path: &[(Real, Real)]) {
    let range = canvas.coord_range();
    let half_x = (range.x / 2.0).ceil();
    let half_t = (range.y / 2.0).ceil();

    // Horizontal (constant-time) gridlines
    let t_offset = t.rem_euclid(1.0);
    let mut line_t = -half_t - t_offset;
    while line_t <= half_t {
        canvas.draw_line(Vector2::new(-half_x, line_t), Vector2::new(half_x, line_t));
        line_t += 1.0;
    }

    // Vertical (constant-position) gridlines
    let x_offset = x.rem_euclid(1.0);
    let mut line_x = -half_x - x_offset;
    while line_x <= half_x {
        canvas.draw_line(Vector2::new(line_x, -half_t), Vector2::new(line_x, half_t));
        line_x += 1.0;
    }

    // Past worldline, relative to the player (screen x = position,
    // screen y = time)
    for pair in path.windows(2) {
        let (t0, x0) = pair[0];
        let (t1, x1) = pair[1];
        canvas.draw_line(Vector2::new(x0 - x, t0 - t), Vector2::new(x1 - x, t1 - t));
    }

    canvas.draw_point(Vector2::new(0.0, 0.0));
}

fn push_path(path: &mut Vec<(Real, Real)>, t: Real, x: Real) {
    path.push((t, x));
    if path.len() > MAX_PATH_LEN {
        let excess = path.len() - MAX_PATH_LEN;
        path.drain(..excess);
    }
}

/// Controllable particle with Galilean kinematics: thrust changes `v`
/// directly, no speed limit.
#[derive(Debug, Clone)]
pub struct GalileanPlayer {
    t: Real,
    x: Real,
    v: Real,
    accel: Real,
    thrust: Real,
    path: Vec<(Real, Real)>,
    iters: u64,
}

impl Default for GalileanPlayer {
    fn default() -> Self {
        Self {
            t: 0.0,
            x: 0.0,
            v: 0.0,
            accel: 10.0,
            thrust: 0.0,
            path: vec![(0.0, 0.0)],
            iters: 0,
        }
    }
}

impl Simulate for GalileanPlayer {
    fn update(&mut self, dt: Real) -> SimResult<()> {
        self.v += self.thrust * self.accel * dt;
        self.t += dt;
        self.x += self.v * dt;
        push_path(&mut self.path, self.t, self.x);

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, x = self.x, v = self.v, "galilean player");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        vec![self.t, self.x, self.v]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "x", "v"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_diagram(canvas, self.t, self.x, &self.path);
        canvas.draw_text(
            Vector2::new(-4.5, 4.5),
            &format!("t = {:.2}  v = {:.2}", self.t, self.v),
        );
    }

    fn handle_event(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::Accelerate(sign) => self.thrust = sign.clamp(-1.0, 1.0),
            ControlEvent::Halt => {
                self.v = 0.0;
                self.thrust = 0.0;
            }
            ControlEvent::ToggleFrameLock => {}
        }
    }
}

/// Controllable particle with special-relativistic kinematics (c = 1).
///
/// Thrust is a constant proper acceleration, so the coordinate velocity
/// saturates below c. The model keeps its own proper-time bookkeeping:
/// with the frame lock off, one wall-clock second is one second of the
/// player's proper time; toggled on, it is one second of rest-frame
/// coordinate time. Either way the bookkeeping stays internal; the
/// runner's own accumulator is never affected.
#[derive(Debug, Clone)]
pub struct RelativisticPlayer {
    t: Real,
    x: Real,
    v: Real,
    /// Player's proper time.
    tau: Real,
    proper_accel: Real,
    thrust: Real,
    /// If true, wall-clock time is matched to rest-frame time instead of
    /// the player's proper time.
    rest_frame_lock: bool,
    max_v: Real,
    path: Vec<(Real, Real)>,
    iters: u64,
}

impl RelativisticPlayer {
    fn time_dilation(&self) -> Real {
        (1.0 - self.v * self.v).sqrt()
    }

    fn coordinate_accel(&self) -> Real {
        self.proper_accel * (1.0 - self.v * self.v).powf(1.5)
    }

    fn clamp_v(&mut self) {
        self.v = self.v.clamp(-self.max_v, self.max_v);
    }
}

impl Default for RelativisticPlayer {
    fn default() -> Self {
        Self {
            t: 0.0,
            x: 0.0,
            v: 0.0,
            tau: 0.0,
            proper_accel: 5.0,
            thrust: 0.0,
            rest_frame_lock: false,
            // Just under c; past this the dilation factor underflows
            max_v: 1.0 - 1e-14,
            path: vec![(0.0, 0.0)],
            iters: 0,
        }
    }
}

impl Simulate for RelativisticPlayer {
    fn update(&mut self, dt_wall: Real) -> SimResult<()> {
        let (dt, dtau) = if self.rest_frame_lock {
            (dt_wall, dt_wall * self.time_dilation())
        } else {
            (dt_wall / self.time_dilation(), dt_wall)
        };

        self.v += self.thrust * self.coordinate_accel() * dt;
        self.clamp_v();
        self.t += dt;
        self.x += self.v * dt;
        self.tau += dtau;
        push_path(&mut self.path, self.t, self.x);

        self.iters += 1;
        if self.iters % DIAG_EVERY == 0 {
            debug!(t = self.t, tau = self.tau, v = self.v, "relativistic player");
        }
        Ok(())
    }

    fn state(&self) -> StateVec {
        vec![self.t, self.x, self.v, self.tau]
    }

    fn state_labels(&self) -> &'static [&'static str] {
        &["t", "x", "v", "tau"]
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_diagram(canvas, self.t, self.x, &self.path);

        // Line of simultaneity in the player's frame: t = v x
        let range = canvas.coord_range();
        let half_x = range.x / 2.0;
        canvas.draw_line(
            Vector2::new(-half_x, -self.v * half_x),
            Vector2::new(half_x, self.v * half_x),
        );

        canvas.draw_text(
            Vector2::new(-4.5, 4.5),
            &format!("t = {:.2}  tau = {:.2}  v = {:.4}", self.t, self.tau, self.v),
        );
    }

    fn handle_event(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::Accelerate(sign) => self.thrust = sign.clamp(-1.0, 1.0),
            ControlEvent::Halt => {
                self.v = 0.0;
                self.thrust = 0.0;
            }
            ControlEvent::ToggleFrameLock => self.rest_frame_lock = !self.rest_frame_lock,
        }
    }
}
