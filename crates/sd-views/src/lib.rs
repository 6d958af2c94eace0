//! View system for the salary dashboard
//!
//! Each panel implements [`DashboardView`]: it reads the shared state,
//! caches its aggregation keyed on the filter revision and draws with
//! egui. Panels are independent; one panel's empty-input notice never
//! affects the others.

mod metrics;
pub mod plots;
mod table;

pub use metrics::MetricsStrip;
pub use plots::{
    CountryMapConfig, CountryMapView, RemoteDonutConfig, RemoteDonutView, SalaryHistogramConfig,
    SalaryHistogramView, TopTitlesConfig, TopTitlesView,
};
pub use table::{DetailTableConfig, DetailTableView};

use egui::Ui;
use sd_core::DashboardState;
use serde_json::Value;

/// Unique identifier for a dashboard view
pub type ViewId = uuid::Uuid;

/// Base trait for all dashboard panels
pub trait DashboardView {
    /// Get the unique ID of this view
    fn id(&self) -> ViewId;

    /// Get the panel title
    fn title(&self) -> &str;

    /// Draw the panel
    fn ui(&mut self, state: &DashboardState, ui: &mut Ui);

    /// Save configuration
    fn save_config(&self) -> Value {
        serde_json::json!({})
    }

    /// Load configuration
    fn load_config(&mut self, _config: Value) {}
}

/// Centered notice shown when a panel has nothing to draw.
pub fn no_data_notice(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new(message).weak());
    });
}
