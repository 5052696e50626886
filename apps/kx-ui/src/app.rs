use crate::paint_canvas::PaintCanvas;
use egui::{Color32, Key};
use kx_core::Real;
use kx_sim::{ControlEvent, RunOptions, Simulate, StepClock};
use tracing::info;

pub struct KinetixApp {
    model_name: &'static str,
    sim: Box<dyn Simulate>,
    clock: StepClock,
    opts: RunOptions,
    /// Simulated-time target, accumulated from unpaused frame time so a
    /// pause or a time-scale change never causes a catch-up burst.
    target: Real,
    paused: bool,
    last_error: Option<String>,
}

impl KinetixApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let opts = RunOptions::default();
        let model_name = kx_models::MODEL_NAMES[0];
        Self {
            model_name,
            sim: kx_models::build(model_name).expect("default model exists"),
            clock: StepClock::new(opts.dt).expect("default dt is valid"),
            opts,
            target: 0.0,
            paused: false,
            last_error: None,
        }
    }

    fn reset(&mut self) {
        info!(model = self.model_name, dt = self.opts.dt, "resetting simulation");
        self.sim = kx_models::build(self.model_name).expect("registered model builds");
        self.clock = StepClock::new(self.opts.dt).expect("dt validated by slider range");
        self.target = 0.0;
        self.last_error = None;
    }

    fn deliver_input(&mut self, ctx: &egui::Context) {
        let (thrust, halt, toggle) = ctx.input(|i| {
            let mut thrust = 0.0;
            if i.key_down(Key::ArrowRight) {
                thrust += 1.0;
            }
            if i.key_down(Key::ArrowLeft) {
                thrust -= 1.0;
            }
            (thrust, i.key_pressed(Key::Space), i.key_pressed(Key::T))
        });

        self.sim.handle_event(&ControlEvent::Accelerate(thrust));
        if halt {
            self.sim.handle_event(&ControlEvent::Halt);
        }
        if toggle {
            self.sim.handle_event(&ControlEvent::ToggleFrameLock);
        }
    }

    fn side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Kinetix");

            let mut selected = self.model_name;
            egui::ComboBox::from_label("Model")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for name in kx_models::MODEL_NAMES {
                        ui.selectable_value(&mut selected, *name, *name);
                    }
                });
            if selected != self.model_name {
                self.model_name = selected;
                self.reset();
            }

            ui.separator();

            ui.add(
                egui::Slider::new(&mut self.opts.time_scale, 0.1..=50.0)
                    .logarithmic(true)
                    .text("time scale"),
            );
            let dt_changed = ui
                .add(
                    egui::Slider::new(&mut self.opts.dt, 1e-4..=1e-2)
                        .logarithmic(true)
                        .text("dt (s)"),
                )
                .changed();
            if dt_changed {
                self.reset();
            }

            ui.horizontal(|ui| {
                if ui
                    .button(if self.paused { "Resume" } else { "Pause" })
                    .clicked()
                {
                    self.paused = !self.paused;
                }
                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });

            ui.separator();
            ui.label(format!("sim time: {:.2} s", self.clock.elapsed()));
            ui.label(format!("steps: {}", self.clock.steps()));
            ui.label("arrows: thrust   space: halt   T: frame lock");

            if let Some(err) = &self.last_error {
                ui.separator();
                ui.colored_label(Color32::RED, err);
            }
        });
    }
}

impl eframe::App for KinetixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.side_panel(ctx);
        self.deliver_input(ctx);

        if !self.paused && self.last_error.is_none() {
            let frame_dt = ctx.input(|i| i.unstable_dt) as Real;
            self.target += frame_dt * self.opts.time_scale;
            if let Err(e) = self
                .clock
                .catch_up(self.sim.as_mut(), self.target, self.opts.max_steps)
            {
                self.last_error = Some(e.to_string());
                self.paused = true;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            painter.rect_filled(rect, 0.0, Color32::WHITE);

            let mut canvas = PaintCanvas::new(&painter, rect);
            self.sim.draw(&mut canvas);
        });

        ctx.request_repaint();
    }
}
