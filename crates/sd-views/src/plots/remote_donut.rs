//! Donut chart of remote-ratio proportions

use std::f64::consts::TAU;

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use sd_core::aggregate;
use sd_core::DashboardState;
use serde_json::{json, Value};

use crate::plots::colors::categorical_color;
use crate::{DashboardView, ViewId};

/// Configuration for the remote-ratio donut
#[derive(Debug, Clone)]
pub struct RemoteDonutConfig {
    /// Inner radius as a fraction of the outer radius.
    pub hole_ratio: f32,
    /// Draw "label percent" annotations on the segments.
    pub show_labels: bool,
}

impl Default for RemoteDonutConfig {
    fn default() -> Self {
        Self {
            hole_ratio: 0.5,
            show_labels: true,
        }
    }
}

/// Share of office / hybrid / remote rows in the filtered view.
pub struct RemoteDonutView {
    id: ViewId,
    title: String,
    pub config: RemoteDonutConfig,

    // State
    cached: Option<Vec<(String, usize)>>,
    last_revision: Option<u64>,
}

impl RemoteDonutView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::new_v4(),
            title: title.into(),
            config: RemoteDonutConfig::default(),
            cached: None,
            last_revision: None,
        }
    }

    fn draw_segment(
        painter: &egui::Painter,
        center: Pos2,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f64,
        end_angle: f64,
        color: Color32,
    ) {
        let segments = ((end_angle - start_angle) * 180.0 / std::f64::consts::PI).max(8.0) as usize;
        let mut vertices = Vec::with_capacity((segments + 1) * 2);

        for i in 0..=segments {
            let angle = start_angle + (end_angle - start_angle) * (i as f64 / segments as f64);
            let cos = angle.cos() as f32;
            let sin = angle.sin() as f32;
            vertices.push(center + Vec2::new(inner_radius * cos, inner_radius * sin));
            vertices.push(center + Vec2::new(outer_radius * cos, outer_radius * sin));
        }

        for i in 0..segments {
            let idx = i * 2;
            let quad = vec![
                vertices[idx],
                vertices[idx + 1],
                vertices[idx + 3],
                vertices[idx + 2],
            ];
            painter.add(Shape::convex_polygon(
                quad,
                color,
                Stroke::new(1.0, color),
            ));
        }
    }
}

impl DashboardView for RemoteDonutView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, state: &DashboardState, ui: &mut Ui) {
        if state.filtered().is_empty() {
            crate::no_data_notice(ui, "No data available for the employment types chart.");
            return;
        }

        let revision = state.revision();
        if self.cached.is_none() || self.last_revision != Some(revision) {
            self.cached = Some(aggregate::remote_ratio_counts(state.filtered()));
            self.last_revision = Some(revision);
        }
        let Some(counts) = self.cached.as_ref() else {
            return;
        };
        // A filtered view with no decodable remote-ratio values draws
        // an empty ring area, the same as any other empty chart body.
        let total: usize = counts.iter().map(|(_, n)| n).sum::<usize>().max(1);

        let side = ui.available_width().min(ui.available_height());
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), side), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let outer_radius = rect.height().min(rect.width()) / 2.0 * 0.85;
        let inner_radius = outer_radius * self.config.hole_ratio;

        // Segments start at twelve o'clock and run clockwise in
        // descending-count order.
        let mut start_angle = -TAU / 4.0;
        for (i, (label, count)) in counts.iter().enumerate() {
            let sweep = TAU * (*count as f64 / total as f64);
            let color = categorical_color(i);
            Self::draw_segment(
                &painter,
                center,
                inner_radius,
                outer_radius,
                start_angle,
                start_angle + sweep,
                color,
            );

            if self.config.show_labels {
                let mid_angle = start_angle + sweep / 2.0;
                let label_radius = (inner_radius + outer_radius) / 2.0;
                let label_pos = center
                    + Vec2::new(
                        label_radius * mid_angle.cos() as f32,
                        label_radius * mid_angle.sin() as f32,
                    );
                let percent = 100.0 * *count as f64 / total as f64;
                painter.text(
                    label_pos,
                    Align2::CENTER_CENTER,
                    format!("{label} {percent:.1}%"),
                    FontId::proportional(11.0),
                    Color32::from_gray(20),
                );
            }

            start_angle += sweep;
        }
    }

    fn save_config(&self) -> Value {
        json!({
            "hole_ratio": self.config.hole_ratio,
            "show_labels": self.config.show_labels,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(hole) = config.get("hole_ratio").and_then(|v| v.as_f64()) {
            self.config.hole_ratio = hole as f32;
        }
        if let Some(show_labels) = config.get("show_labels").and_then(|v| v.as_bool()) {
            self.config.show_labels = show_labels;
        }
    }
}
