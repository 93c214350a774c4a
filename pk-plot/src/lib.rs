use eframe::egui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, Points};

/// A runnable egui application for plotting profiles and contact points.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    markers: Vec<Series>,
    data_aspect: Option<f32>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

impl Series {
    fn new(name: &str, points: &[[f64; 2]]) -> Self {
        Self {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        }
    }
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polyline, such as a profile.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series::new(name, points));
        self
    }

    /// Adds unconnected markers, such as contact points.
    #[must_use]
    pub fn add_markers(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.markers.push(Series::new(name, points));
        self
    }

    /// Fixes the ratio between the axis scales; `1.0` keeps shapes undistorted.
    #[must_use]
    pub fn with_data_aspect(mut self, aspect: f32) -> Self {
        self.data_aspect = Some(aspect);
        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("profiles").legend(Legend::default());
            if let Some(aspect) = self.data_aspect {
                plot = plot.data_aspect(aspect);
            }

            plot.show(ui, |plot_ui| {
                for series in &self.series {
                    plot_ui.line(Line::new(series.points.as_slice()).name(&series.name));
                }
                for markers in &self.markers {
                    plot_ui.points(
                        Points::new(markers.points.as_slice())
                            .name(&markers.name)
                            .shape(MarkerShape::Circle)
                            .radius(4.0),
                    );
                }
            });
        });
    }
}
