//! Main application entry point

use std::path::Path;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context, Ui};
use tracing::info;

use sd_core::format_count;
use sd_core::state::{shared, DashboardState, SharedState};
use sd_ui::{FilterPanel, FooterBadge, Theme};
use sd_views::{
    CountryMapView, DashboardView, DetailTableView, MetricsStrip, RemoteDonutView,
    SalaryHistogramView, TopTitlesView,
};

/// Source dataset, relative to the working directory.
const SALARY_TABLE_PATH: &str = "data/data_salaries.csv";
/// Footer badge image, relative to the working directory.
const SUPPORT_BADGE_PATH: &str = "assets/support_badge.png";
/// Where the footer badge links to.
const SUPPORT_URL: &str = "https://ko-fi.com/salarylab";
const FOOTER_CREDIT: &str = "Created with care by the Salary Lab team";

const CHART_HEIGHT: f32 = 300.0;

/// Main application state
struct SalaryDashboardApp {
    /// Dataset and filter state shared with the views
    state: SharedState,

    /// Sidebar filter controls
    filter_panel: FilterPanel,

    /// Headline metric cards
    metrics: MetricsStrip,

    /// The four chart panels, drawn as a 2x2 grid
    top_titles: TopTitlesView,
    histogram: SalaryHistogramView,
    remote_donut: RemoteDonutView,
    country_map: CountryMapView,

    /// Filtered-row detail table
    detail_table: DetailTableView,

    /// Footer badge
    footer: FooterBadge,
}

impl SalaryDashboardApp {
    fn new(cc: &eframe::CreationContext<'_>, state: DashboardState, footer: FooterBadge) -> Self {
        sd_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let mut app = Self {
            state: shared(state),
            filter_panel: FilterPanel::new(),
            metrics: MetricsStrip::new("Main Metrics (Annual Salary in USD)"),
            top_titles: TopTitlesView::new("Top 10 Job Titles by Average Salary"),
            histogram: SalaryHistogramView::new("Annual Salary Distribution"),
            remote_donut: RemoteDonutView::new("Proportion of Employment Types"),
            country_map: CountryMapView::new("Average Salary of Data Scientists by Country"),
            detail_table: DetailTableView::new("Detailed Data"),
            footer,
        };

        if let Some(storage) = cc.storage {
            app.restore_view_configs(storage);
        }
        app
    }

    fn view_configs_mut(&mut self) -> Vec<(&'static str, &mut dyn DashboardView)> {
        vec![
            ("view.top_titles", &mut self.top_titles),
            ("view.histogram", &mut self.histogram),
            ("view.remote_donut", &mut self.remote_donut),
            ("view.country_map", &mut self.country_map),
            ("view.detail_table", &mut self.detail_table),
        ]
    }

    fn restore_view_configs(&mut self, storage: &dyn eframe::Storage) {
        for (key, view) in self.view_configs_mut() {
            let Some(raw) = storage.get_string(key) else {
                continue;
            };
            match serde_json::from_str(&raw) {
                Ok(config) => view.load_config(config),
                Err(e) => tracing::warn!(key, error = %e, "ignoring stored view config"),
            }
        }
    }
}

/// A titled, fixed-height cell of the chart grid.
fn chart_cell(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong(title);
        ui.add_space(2.0);
        ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), CHART_HEIGHT));
            add_contents(ui);
        });
    });
}

impl eframe::App for SalaryDashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // The sidebar may install a new selection; everything below
        // reads the refreshed state.
        self.filter_panel.ui(ctx, &self.state);

        let state = self.state.read();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("page_scroll")
                .show(ui, |ui| {
                    sd_ui::page_header(ui);
                    ui.separator();

                    ui.strong(self.metrics.title().to_string());
                    ui.add_space(4.0);
                    self.metrics.ui(&state, ui);
                    ui.add_space(8.0);
                    ui.separator();

                    ui.columns(2, |columns| {
                        let title = self.top_titles.title().to_string();
                        chart_cell(&mut columns[0], &title, |ui| {
                            self.top_titles.ui(&state, ui);
                        });
                        let title = self.histogram.title().to_string();
                        chart_cell(&mut columns[1], &title, |ui| {
                            self.histogram.ui(&state, ui);
                        });
                    });
                    ui.columns(2, |columns| {
                        let title = self.remote_donut.title().to_string();
                        chart_cell(&mut columns[0], &title, |ui| {
                            self.remote_donut.ui(&state, ui);
                        });
                        let title = self.country_map.title().to_string();
                        chart_cell(&mut columns[1], &title, |ui| {
                            self.country_map.ui(&state, ui);
                        });
                    });

                    ui.add_space(8.0);
                    let record_count = format_count(state.filtered().len());
                    egui::CollapsingHeader::new(format!("Detailed Data ({record_count} records)"))
                        .id_source("detail_table_header")
                        .default_open(false)
                        .show(ui, |ui| {
                            self.detail_table.ui(&state, ui);
                        });

                    self.footer.ui(ui, FOOTER_CREDIT);
                });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        for (key, view) in self.view_configs_mut() {
            storage.set_string(key, view.save_config().to_string());
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting salary dashboard");

    // All inputs load before the window opens; any failure here aborts
    // startup with no partial rendering.
    let table = sd_data::load_salary_table(Path::new(SALARY_TABLE_PATH))
        .with_context(|| format!("failed to load salary table from {SALARY_TABLE_PATH}"))?;
    let records = sd_data::normalize(&table.raw);
    let badge_bytes = sd_data::assets::load_badge(Path::new(SUPPORT_BADGE_PATH))
        .with_context(|| format!("failed to load support badge from {SUPPORT_BADGE_PATH}"))?;
    let footer = FooterBadge::new(&badge_bytes, SUPPORT_URL)
        .map_err(|e| anyhow::anyhow!("failed to decode support badge: {e}"))?;
    let state = DashboardState::new(records, table.cleaned);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(move |cc| Box::new(SalaryDashboardApp::new(cc, state, footer))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}
