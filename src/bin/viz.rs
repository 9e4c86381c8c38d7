use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use swing_tune::sim::{self, Run, SimConfig, TickRecord};
use swing_tune::tuning::Gains;

fn main() -> eframe::Result {
    let gains = parse_gains().unwrap_or(Gains::new(0.0124, 0.0, 0.125));
    let config = SimConfig::default();
    let run = sim::simulate(gains, &config);

    let app = SwingViz { run, gains, config };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Ball on Swing", options, Box::new(|_| Ok(Box::new(app))))
}

/// `swing-viz [k_p k_i k_d]`
fn parse_gains() -> Option<Gains> {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .map(|a| a.parse().ok())
        .collect::<Option<_>>()?;
    match args.as_slice() {
        [kp, ki, kd] => Some(Gains::new(*kp, *ki, *kd)),
        _ => None,
    }
}

struct SwingViz {
    run: Run,
    gains: Gains,
    config: SimConfig,
}

impl SwingViz {
    fn series(&self, f: impl Fn(&TickRecord) -> f64) -> Vec<[f64; 2]> {
        self.run.trajectory.iter().map(|r| [r.tick as f64, f(r)]).collect()
    }
}

impl eframe::App for SwingViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Gains: {}", self.gains));
            let outcome = match self.run.settled_at {
                Some(tick) => format!("settled at tick {tick}"),
                None => format!("did not settle in {} ticks", self.config.max_ticks),
            };
            ui.label(format!(
                "Start: {:.1}  |  Sigma: {:e}  |  {}",
                self.config.initial_position, self.config.sigma, outcome,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Position");
                    Plot::new("position")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Tick")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Position", self.series(|r| r.position)));
                        });
                });

                ui.vertical(|ui| {
                    ui.label("Speed");
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Tick")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", self.series(|r| r.speed)));
                        });
                });
            });

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Swing Angle (deg)");
                    Plot::new("angle")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Tick")
                        .show(ui, |plot_ui| {
                            let angle = self.series(|r| r.angle.to_degrees());
                            plot_ui.line(Line::new("Angle", angle));
                        });
                });

                ui.vertical(|ui| {
                    ui.label("Ball Path (pivot frame)");
                    let points: PlotPoints = self
                        .run
                        .trajectory
                        .iter()
                        .map(|r| [r.world.x, r.world.y])
                        .collect();
                    Plot::new("path")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Path", points));
                        });
                });
            });
        });
    }
}
