//! Sidebar filter panel
//!
//! Draws one multi-select per filterable column and installs the new
//! selection into the shared state when anything changed. The filtered
//! view is recomputed there, not here.

use egui::Context;
use sd_core::SharedState;

use crate::widgets::multi_select;

pub struct FilterPanel {
    width: f32,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self { width: 210.0 }
    }

    pub fn ui(&mut self, ctx: &Context, state: &SharedState) {
        let (options, mut selection) = {
            let state = state.read();
            (state.options().clone(), state.selection().clone())
        };

        let mut changed = false;
        egui::SidePanel::left("filter_panel")
            .default_width(self.width)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading("Filters");
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_source("filter_panel_scroll")
                    .show(ui, |ui| {
                        changed |= multi_select(
                            ui,
                            "filter_year",
                            "Year",
                            &options.years,
                            &mut selection.years,
                        );
                        changed |= multi_select(
                            ui,
                            "filter_seniority",
                            "Seniority",
                            &options.experience_levels,
                            &mut selection.experience_levels,
                        );
                        changed |= multi_select(
                            ui,
                            "filter_contract",
                            "Contract Type",
                            &options.employment_types,
                            &mut selection.employment_types,
                        );
                        changed |= multi_select(
                            ui,
                            "filter_company_size",
                            "Company Size",
                            &options.company_sizes,
                            &mut selection.company_sizes,
                        );
                    });
            });

        if changed {
            state.write().set_selection(selection);
        }
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}
