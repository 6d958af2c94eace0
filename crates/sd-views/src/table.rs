//! Detail table of the filtered view

use egui::Ui;
use sd_core::{format_usd, DashboardState, Record};
use serde_json::{json, Value};

use crate::{DashboardView, ViewId};

/// Configuration for the detail table
#[derive(Debug, Clone)]
pub struct DetailTableConfig {
    pub show_row_numbers: bool,
    pub striped_rows: bool,
    pub resizable_columns: bool,
    /// Rows drawn at most; the table itself stays scrollable.
    pub max_rows_displayed: usize,
}

impl Default for DetailTableConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: true,
            striped_rows: true,
            resizable_columns: true,
            max_rows_displayed: 1000,
        }
    }
}

const COLUMNS: &[&str] = &[
    "Year",
    "Seniority",
    "Contract",
    "Salary (USD)",
    "Residence",
    "Remote",
    "Company Size",
    "Job Title",
    "ISO3",
];

/// Scrollable table of the rows matching the current selection.
pub struct DetailTableView {
    id: ViewId,
    title: String,
    pub config: DetailTableConfig,
}

impl DetailTableView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ViewId::new_v4(),
            title: title.into(),
            config: DetailTableConfig::default(),
        }
    }

    fn render_table(&self, ui: &mut Ui, rows: &[Record]) {
        use egui_extras::{Column, TableBuilder};

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
        let num_rows = rows.len().min(self.config.max_rows_displayed);

        let mut builder = TableBuilder::new(ui)
            .striped(self.config.striped_rows)
            .resizable(self.config.resizable_columns)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .max_scroll_height(320.0)
            .vscroll(true);

        if self.config.show_row_numbers {
            builder = builder.column(Column::initial(44.0).at_least(36.0));
        }
        for _ in COLUMNS {
            builder = builder.column(Column::initial(96.0).at_least(60.0));
        }

        builder
            .header(20.0, |mut header| {
                if self.config.show_row_numbers {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                }
                for name in COLUMNS {
                    header.col(|ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, num_rows, |row_index, mut row| {
                    let record = &rows[row_index];
                    if self.config.show_row_numbers {
                        row.col(|ui| {
                            ui.label(row_index.to_string());
                        });
                    }
                    for cell in record_cells(record) {
                        row.col(|ui| {
                            ui.label(cell.unwrap_or_else(|| "-".to_string()));
                        });
                    }
                });
            });
    }
}

fn record_cells(record: &Record) -> [Option<String>; 9] {
    [
        record.work_year.map(|y| y.to_string()),
        record.experience_level.clone(),
        record.employment_type.clone(),
        record.salary_in_usd.map(format_usd),
        record.employee_residence.clone(),
        record.remote_ratio.clone(),
        record.company_size.clone(),
        record.job_title.clone(),
        record.residence_iso3.clone(),
    ]
}

impl DashboardView for DetailTableView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, state: &DashboardState, ui: &mut Ui) {
        let rows = state.filtered();
        if rows.is_empty() {
            crate::no_data_notice(ui, "No rows match the current filters.");
            return;
        }
        if rows.len() > self.config.max_rows_displayed {
            ui.label(
                egui::RichText::new(format!(
                    "Showing the first {} of {} rows.",
                    self.config.max_rows_displayed,
                    rows.len()
                ))
                .weak(),
            );
        }
        self.render_table(ui, rows);
    }

    fn save_config(&self) -> Value {
        json!({
            "show_row_numbers": self.config.show_row_numbers,
            "striped_rows": self.config.striped_rows,
            "resizable_columns": self.config.resizable_columns,
            "max_rows_displayed": self.config.max_rows_displayed,
        })
    }

    fn load_config(&mut self, config: Value) {
        if let Some(v) = config.get("show_row_numbers").and_then(|v| v.as_bool()) {
            self.config.show_row_numbers = v;
        }
        if let Some(v) = config.get("striped_rows").and_then(|v| v.as_bool()) {
            self.config.striped_rows = v;
        }
        if let Some(v) = config.get("resizable_columns").and_then(|v| v.as_bool()) {
            self.config.resizable_columns = v;
        }
        if let Some(v) = config.get("max_rows_displayed").and_then(|v| v.as_u64()) {
            self.config.max_rows_displayed = v as usize;
        }
    }
}
