//! Salary distribution histogram

use egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};
use sd_core::aggregate::{self, SalaryBins};
use sd_core::{format_usd, DashboardState};
use serde_json::{json, Value};

use crate::{DashboardView, ViewId};

/// Configuration for the salary histogram
#[derive(Debug, Clone)]
pub struct SalaryHistogramConfig {
    /// Number of bins
    pub num_bins: usize,
    pub bar_color: Color32,
    pub show_grid: bool,
    /// Whether to show the count / mean / min / max strip
    pub show_stats: bool,
}

impl Default for SalaryHistogramConfig {
    fn default() -> Self {
        Self {
            num_bins: 30,
            bar_color: Color32::from_rgb(120, 200, 120),
            show_grid: true,
            show_stats: true,
        }
    }
}

/// Histogram of annual salaries over the cleaned table.
///
/// The cleaned table never changes after startup, so the bins are
/// computed once and kept.
pub struct SalaryHistogramView {
    id: ViewId,
    title: String,
    pub config: SalaryHistogramConfig,

    // State
    cached: Option<(SalaryBins, SalaryStats)>,
}

#[derive(Debug, Clone)]
struct SalaryStats {
    count: usize,
    mean: f64,
    min: f64,
    max: f64,
}

impl SalaryHistogramView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::new_v4(),
            title: title.into(),
            config: SalaryHistogramConfig::default(),
            cached: None,
        }
    }

    fn compute(&self, state: &DashboardState) -> Option<(SalaryBins, SalaryStats)> {
        let bins = aggregate::salary_histogram(state.cleaned(), self.config.num_bins)?;

        let values: Vec<f64> = state.cleaned().iter().filter_map(|r| r.salary_in_usd).collect();
        let stats = SalaryStats {
            count: values.len(),
            mean: values.iter().sum::<f64>() / values.len() as f64,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };
        Some((bins, stats))
    }
}

impl DashboardView for SalaryHistogramView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, state: &DashboardState, ui: &mut Ui) {
        if self.cached.is_none() {
            self.cached = self.compute(state);
        }
        let Some((bins, stats)) = self.cached.as_ref() else {
            crate::no_data_notice(ui, "No data available for the salary distribution chart.");
            return;
        };

        if self.config.show_stats {
            ui.horizontal(|ui| {
                ui.label(format!("Count: {}", stats.count));
                ui.separator();
                ui.label(format!("Mean: {}", format_usd(stats.mean)));
                ui.separator();
                ui.label(format!("Min: {}", format_usd(stats.min)));
                ui.separator();
                ui.label(format!("Max: {}", format_usd(stats.max)));
            });
            ui.add_space(4.0);
        }

        let plot = Plot::new(format!("{:?}", self.id))
            .show_grid(self.config.show_grid)
            .x_axis_label("Annual Salary (USD)")
            .y_axis_label("Count")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false);

        plot.show(ui, |plot_ui| {
            let mut bars = Vec::new();
            for (i, &count) in bins.counts.iter().enumerate() {
                bars.push(
                    Bar::new(bins.center(i), count as f64)
                        .width(bins.width)
                        .fill(self.config.bar_color.linear_multiply(0.8)),
                );
            }
            plot_ui.bar_chart(BarChart::new(bars).color(self.config.bar_color).name("Salaries"));
        });
    }

    fn save_config(&self) -> Value {
        json!({
            "num_bins": self.config.num_bins,
            "show_grid": self.config.show_grid,
            "show_stats": self.config.show_stats,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(bins) = config.get("num_bins").and_then(|v| v.as_u64()) {
            self.config.num_bins = bins as usize;
        }
        if let Some(show_grid) = config.get("show_grid").and_then(|v| v.as_bool()) {
            self.config.show_grid = show_grid;
        }
        if let Some(show_stats) = config.get("show_stats").and_then(|v| v.as_bool()) {
            self.config.show_stats = show_stats;
        }
    }
}
