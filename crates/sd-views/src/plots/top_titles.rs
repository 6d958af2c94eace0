//! Horizontal bar chart of the best-paid job titles

use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};
use sd_core::aggregate;
use sd_core::DashboardState;
use serde_json::{json, Value};

use crate::{DashboardView, ViewId};

/// Configuration for the top-titles chart
#[derive(Debug, Clone)]
pub struct TopTitlesConfig {
    /// How many titles to keep.
    pub cap: usize,
    pub bar_color: Color32,
    pub show_grid: bool,
}

impl Default for TopTitlesConfig {
    fn default() -> Self {
        Self {
            cap: 10,
            bar_color: Color32::from_rgb(96, 156, 246),
            show_grid: true,
        }
    }
}

/// Mean salary per job title over the filtered view, highest means
/// only, drawn smallest to largest.
pub struct TopTitlesView {
    id: ViewId,
    title: String,
    pub config: TopTitlesConfig,

    // State
    cached: Option<Vec<(String, f64)>>,
    last_revision: Option<u64>,
}

impl TopTitlesView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::new_v4(),
            title: title.into(),
            config: TopTitlesConfig::default(),
            cached: None,
            last_revision: None,
        }
    }
}

impl DashboardView for TopTitlesView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, state: &DashboardState, ui: &mut Ui) {
        if state.filtered().is_empty() {
            crate::no_data_notice(ui, "No data available for the job titles chart.");
            return;
        }

        let revision = state.revision();
        if self.cached.is_none() || self.last_revision != Some(revision) {
            self.cached = Some(aggregate::top_job_titles(state.filtered(), self.config.cap));
            self.last_revision = Some(revision);
            tracing::debug!(revision, "recomputed top job titles");
        }
        let Some(data) = self.cached.as_ref() else {
            return;
        };

        let plot = Plot::new(format!("{:?}", self.id))
            .show_grid(self.config.show_grid)
            .x_axis_label("Average Annual Salary (USD)")
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false);

        plot.show(ui, |plot_ui| {
            let mut bars = Vec::new();
            for (i, (title, mean)) in data.iter().enumerate() {
                bars.push(
                    Bar::new(i as f64, *mean)
                        .width(0.7)
                        .name(title)
                        .fill(self.config.bar_color.linear_multiply(0.8)),
                );
            }
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(self.config.bar_color)
                    .name("Average salary"),
            );

            // Title labels drawn inside the bars; the y axis itself
            // stays unlabeled.
            for (i, (title, mean)) in data.iter().enumerate() {
                plot_ui.text(Text::new(
                    PlotPoint::new(*mean * 0.5, i as f64),
                    egui::RichText::new(title.as_str()).size(11.0),
                ));
            }
        });
    }

    fn save_config(&self) -> Value {
        json!({
            "cap": self.config.cap,
            "show_grid": self.config.show_grid,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(cap) = config.get("cap").and_then(|v| v.as_u64()) {
            self.config.cap = cap as usize;
        }
        if let Some(show_grid) = config.get("show_grid").and_then(|v| v.as_bool()) {
            self.config.show_grid = show_grid;
        }
    }
}
