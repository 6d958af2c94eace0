//! World map of mean salaries per country

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use sd_core::aggregate::{self, FOCUS_JOB_TITLE};
use sd_core::{format_usd, DashboardState};
use serde_json::{json, Value};

use crate::plots::colors::red_yellow_green;
use crate::{DashboardView, ViewId};

/// Configuration for the country map
#[derive(Debug, Clone)]
pub struct CountryMapConfig {
    pub marker_size: f32,
    pub show_grid: bool,
    pub show_tooltips: bool,
}

impl Default for CountryMapConfig {
    fn default() -> Self {
        Self {
            marker_size: 6.0,
            show_grid: true,
            show_tooltips: true,
        }
    }
}

/// One placed marker, ready to draw.
struct CountryMarker {
    iso3: String,
    name: &'static str,
    lat: f64,
    lon: f64,
    mean_salary: f64,
}

/// Mean salary of the focus job title per residence country, placed at
/// each country's centroid on an equirectangular world map.
///
/// The empty-input guard looks at the whole filtered view; a view with
/// rows but none for the focus title draws an empty map.
pub struct CountryMapView {
    id: ViewId,
    title: String,
    pub config: CountryMapConfig,

    // State
    cached: Option<Vec<(String, f64)>>,
    last_revision: Option<u64>,
}

impl CountryMapView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::new_v4(),
            title: title.into(),
            config: CountryMapConfig::default(),
            cached: None,
            last_revision: None,
        }
    }

    fn markers(&self) -> Vec<CountryMarker> {
        let Some(means) = self.cached.as_ref() else {
            return Vec::new();
        };
        means
            .iter()
            .filter_map(|(iso3, mean)| {
                // Countries outside the registry have no centroid to
                // draw at and are skipped.
                let country = sd_data::countries::by_alpha3(iso3)?;
                Some(CountryMarker {
                    iso3: iso3.clone(),
                    name: country.name,
                    lat: country.lat,
                    lon: country.lon,
                    mean_salary: *mean,
                })
            })
            .collect()
    }

    fn project_point(lat: f64, lon: f64, rect: &Rect) -> Pos2 {
        // Equirectangular projection.
        let x = (lon + 180.0) / 360.0;
        let y = (90.0 - lat) / 180.0;

        Pos2::new(
            rect.left() + x as f32 * rect.width(),
            rect.top() + y as f32 * rect.height(),
        )
    }

    fn draw_base_map(&self, ui: &Ui, rect: Rect) {
        let painter = ui.painter_at(rect);

        // Background
        painter.rect_filled(rect, Rounding::same(4.0), Color32::from_rgb(28, 34, 44));
        painter.rect_stroke(rect, Rounding::same(4.0), Stroke::new(1.0, Color32::from_gray(70)));

        if !self.config.show_grid {
            return;
        }

        // Latitude lines
        for lat in (-90..=90).step_by(30) {
            let start = Self::project_point(lat as f64, -180.0, &rect);
            let end = Self::project_point(lat as f64, 180.0, &rect);
            painter.line_segment([start, end], Stroke::new(0.5, Color32::from_gray(55)));

            if lat % 60 == 0 {
                painter.text(
                    Pos2::new(rect.left() + 4.0, (start.y + end.y) / 2.0),
                    Align2::LEFT_CENTER,
                    format!("{lat}°"),
                    FontId::proportional(9.0),
                    Color32::from_gray(110),
                );
            }
        }

        // Longitude lines
        for lon in (-180..=180).step_by(60) {
            let start = Self::project_point(90.0, lon as f64, &rect);
            let end = Self::project_point(-90.0, lon as f64, &rect);
            painter.line_segment([start, end], Stroke::new(0.5, Color32::from_gray(55)));
        }
    }

    fn draw_markers(&self, ui: &Ui, rect: Rect, markers: &[CountryMarker]) {
        let painter = ui.painter_at(rect);

        let min = markers.iter().map(|m| m.mean_salary).fold(f64::INFINITY, f64::min);
        let max = markers
            .iter()
            .map(|m| m.mean_salary)
            .fold(f64::NEG_INFINITY, f64::max);
        let span = (max - min).max(1.0);

        for marker in markers {
            let pos = Self::project_point(marker.lat, marker.lon, &rect);
            let t = ((marker.mean_salary - min) / span) as f32;
            let color = red_yellow_green(t);

            painter.circle_filled(pos, self.config.marker_size, color);
            painter.circle_stroke(pos, self.config.marker_size, Stroke::new(1.0, Color32::WHITE));
        }

        // Scale hint in the corner.
        if min.is_finite() && max.is_finite() {
            painter.text(
                Pos2::new(rect.left() + 6.0, rect.bottom() - 6.0),
                Align2::LEFT_BOTTOM,
                format!("{} low · {} high", format_usd(min), format_usd(max)),
                FontId::proportional(10.0),
                Color32::from_gray(150),
            );
        }
    }

    fn handle_hover(&self, ui: &Ui, rect: Rect, response: &egui::Response, markers: &[CountryMarker]) {
        if !self.config.show_tooltips || !response.hovered() {
            return;
        }
        let Some(hover_pos) = response.hover_pos() else {
            return;
        };

        let mut nearest = None;
        let mut min_dist = f32::INFINITY;
        for marker in markers {
            let pos = Self::project_point(marker.lat, marker.lon, &rect);
            let dist = (pos - hover_pos).length();
            if dist < min_dist && dist < self.config.marker_size + 6.0 {
                min_dist = dist;
                nearest = Some(marker);
            }
        }

        if let Some(marker) = nearest {
            egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new(("country_map", self.id)), |ui| {
                ui.strong(format!("{} ({})", marker.name, marker.iso3));
                ui.label(format!("Average salary: {}", format_usd(marker.mean_salary)));
            });
        }
    }
}

impl DashboardView for CountryMapView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, state: &DashboardState, ui: &mut Ui) {
        if state.filtered().is_empty() {
            crate::no_data_notice(ui, "No data available for the countries chart.");
            return;
        }

        let revision = state.revision();
        if self.cached.is_none() || self.last_revision != Some(revision) {
            self.cached = Some(aggregate::country_mean_salary(
                state.filtered(),
                FOCUS_JOB_TITLE,
            ));
            self.last_revision = Some(revision);
        }
        let markers = self.markers();

        let available = ui.available_size();
        let height = (available.x * 0.55).min(available.y.max(120.0));
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(available.x, height), Sense::hover());

        self.draw_base_map(ui, rect);
        self.draw_markers(ui, rect, &markers);
        self.handle_hover(ui, rect, &response, &markers);
    }

    fn save_config(&self) -> Value {
        json!({
            "marker_size": self.config.marker_size,
            "show_grid": self.config.show_grid,
            "show_tooltips": self.config.show_tooltips,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(size) = config.get("marker_size").and_then(|v| v.as_f64()) {
            self.config.marker_size = size as f32;
        }
        if let Some(show_grid) = config.get("show_grid").and_then(|v| v.as_bool()) {
            self.config.show_grid = show_grid;
        }
        if let Some(show_tooltips) = config.get("show_tooltips").and_then(|v| v.as_bool()) {
            self.config.show_tooltips = show_tooltips;
        }
    }
}
