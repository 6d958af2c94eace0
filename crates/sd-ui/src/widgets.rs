//! Small reusable widgets

use std::collections::BTreeSet;
use std::fmt::Display;

use egui::Ui;

/// Checkbox list over `options`, mutating `selected` in place.
///
/// Returns true when the selection changed this frame. The caller
/// guarantees `selected ⊆ options` by construction, so nothing is
/// validated here.
pub fn multi_select<T>(
    ui: &mut Ui,
    id_salt: &str,
    label: &str,
    options: &[T],
    selected: &mut BTreeSet<T>,
) -> bool
where
    T: Clone + Ord + Display,
{
    let mut changed = false;

    egui::CollapsingHeader::new(label)
        .id_source(id_salt)
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.small_button("All").clicked() {
                    selected.extend(options.iter().cloned());
                    changed = true;
                }
                if ui.small_button("None").clicked() && !selected.is_empty() {
                    selected.clear();
                    changed = true;
                }
            });

            for option in options {
                let mut checked = selected.contains(option);
                if ui.checkbox(&mut checked, option.to_string()).changed() {
                    if checked {
                        selected.insert(option.clone());
                    } else {
                        selected.remove(option);
                    }
                    changed = true;
                }
            }
        });

    changed
}
