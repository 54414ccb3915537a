use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use launch_pad_sim::logging::init_tracing;
use launch_pad_sim::vehicle::presets;
use launch_pad_sim::{EventLog, LaunchPad, RocketId, Scheduler, SimConfig};

fn main() -> eframe::Result {
    let _ = dotenvy::dotenv();
    init_tracing();
    let config = SimConfig::from_env();
    let mut pad = LaunchPad::new(config.clone(), EventLog::shared());
    for (name, angle, velocity) in presets::DEMO_SALVO {
        if let Err(e) = pad.add_rocket(name, angle, velocity) {
            tracing::warn!(rocket = name, error = %e, "preset rejected");
        }
    }

    let app = PadViz {
        scheduler: Scheduler::new(config.tick_interval),
        trails: Vec::new(),
        pad,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    let result = eframe::run_native("Rocket Launcher", options, Box::new(|_| Ok(Box::new(app))));

    for event in &*EventLog::shared() {
        println!("{event}\n\n");
    }
    result
}

struct PadViz {
    pad: LaunchPad,
    scheduler: Scheduler,
    trails: Vec<(RocketId, Vec<[f64; 2]>)>,
}

impl PadViz {
    fn record_trails(&mut self) {
        for rocket in self.pad.rockets() {
            let p = [rocket.position().x, rocket.position().y];
            match self.trails.iter_mut().find(|(id, _)| *id == rocket.id()) {
                Some((_, trail)) => {
                    if trail.last() != Some(&p) {
                        trail.push(p);
                    }
                }
                None => self.trails.push((rocket.id(), vec![p])),
            }
        }
    }
}

impl eframe::App for PadViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One tick per frame; the scheduler owns the cadence, egui only repaints.
        self.scheduler.tick(&mut self.pad);
        self.record_trails();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Launch Pad");
            let flying = self.pad.rockets().iter().filter(|r| r.launched()).count();
            ui.label(format!(
                "Rockets: {}  |  Launched: {}  |  Tick: {}  |  Events: {}",
                self.pad.len(),
                flying,
                self.scheduler.ticks(),
                self.pad.log().len(),
            ));
            if ui.button("Launch all").clicked() {
                self.pad.launch_all();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let bounds = self.pad.config().bounds;
            Plot::new("trajectories")
                .x_axis_label("Downrange (m)")
                .data_aspect(1.0)
                .include_x(0.0)
                .include_x(bounds.width)
                .include_y(0.0)
                .include_y(bounds.height)
                .show(ui, |plot_ui| {
                    for rocket in self.pad.rockets() {
                        if let Some((_, trail)) =
                            self.trails.iter().find(|(id, _)| *id == rocket.id())
                        {
                            let points: PlotPoints = trail.iter().copied().collect();
                            plot_ui.line(Line::new(rocket.name().to_string(), points));
                        }
                        let head = [rocket.position().x, rocket.position().y];
                        plot_ui.points(
                            Points::new(rocket.name().to_string(), vec![head]).radius(4.0),
                        );
                    }
                });
        });

        ctx.request_repaint_after(self.scheduler.interval());
    }
}
