//! Metric cards shown above the charts

use egui::{Color32, Rounding, Ui};
use sd_core::{format_count, format_usd, DashboardState, SummaryMetrics};

use crate::{DashboardView, ViewId};

/// The four-card strip of headline metrics.
///
/// The metrics read the unfiltered table, so one computation at first
/// paint is enough for the lifetime of the view.
pub struct MetricsStrip {
    id: ViewId,
    title: String,
    cached: Option<SummaryMetrics>,
}

impl MetricsStrip {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::new_v4(),
            title: title.into(),
            cached: None,
        }
    }
}

impl DashboardView for MetricsStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, state: &DashboardState, ui: &mut Ui) {
        let metrics = self.cached.get_or_insert_with(|| state.metrics());

        let cards = [
            ("Average Salary", format_usd(metrics.average_salary)),
            ("Maximum Salary", format_usd(metrics.max_salary)),
            ("Total Records", format_count(metrics.total_records)),
            ("Most Frequent Job", metrics.most_frequent_job.clone()),
        ];

        ui.columns(cards.len(), |columns| {
            for (column, (label, value)) in columns.iter_mut().zip(cards) {
                metric_card(column, label, &value);
            }
        });
    }
}

fn metric_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::none()
        .fill(ui.style().visuals.faint_bg_color)
        .rounding(Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).size(12.0).color(Color32::from_gray(160)));
                let shown = if value.is_empty() { "-" } else { value };
                ui.label(egui::RichText::new(shown).size(22.0).strong());
                ui.allocate_space(egui::vec2(ui.available_width(), 0.0));
            });
        });
}
