//! Shared dashboard state
//!
//! One `DashboardState` is built at startup and shared behind a lock:
//! the sidebar writes the selection, the views read the filtered rows.
//! Views cache their aggregations keyed on `revision`, which is bumped
//! on every selection change.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::filter::{FilterOptions, FilterSelection};
use crate::metrics::SummaryMetrics;
use crate::record::{RawRecord, Record};

pub struct DashboardState {
    /// Normalized table: every row of the source file, display labels on.
    records: Vec<Record>,
    /// Rows with no missing column, kept with their original codes.
    cleaned: Vec<RawRecord>,
    /// Distinct values offered in the sidebar.
    options: FilterOptions,
    /// Current sidebar selection.
    selection: FilterSelection,
    /// Rows matching the current selection.
    filtered: Vec<Record>,
    /// Bumped whenever the selection changes.
    revision: u64,
}

impl DashboardState {
    pub fn new(records: Vec<Record>, cleaned: Vec<RawRecord>) -> Self {
        let options = FilterOptions::from_tables(&cleaned, &records);
        let selection = FilterSelection::select_all(&options);
        let filtered = selection.apply(&records);
        tracing::info!(
            rows = records.len(),
            complete = cleaned.len(),
            "dashboard state ready"
        );

        Self {
            records,
            cleaned,
            options,
            selection,
            filtered,
            revision: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn cleaned(&self) -> &[RawRecord] {
        &self.cleaned
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Install a new selection, recomputing the filtered view from
    /// scratch. A no-op when the selection is unchanged.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.filtered = self.selection.apply(&self.records);
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            rows = self.filtered.len(),
            "filter selection changed"
        );
    }

    pub fn metrics(&self) -> SummaryMetrics {
        SummaryMetrics::compute(&self.records, self.cleaned.is_empty())
    }
}

/// Handle shared between the app shell and the views.
pub type SharedState = Arc<RwLock<DashboardState>>;

pub fn shared(state: DashboardState) -> SharedState {
    Arc::new(RwLock::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i64, title: &str) -> Record {
        Record {
            work_year: Some(year),
            experience_level: Some("Senior".to_string()),
            employment_type: Some("Full-time".to_string()),
            company_size: Some("Medium".to_string()),
            job_title: Some(title.to_string()),
            salary_in_usd: Some(100_000.0),
            ..Record::default()
        }
    }

    fn cleaned_row(year: i64) -> RawRecord {
        RawRecord {
            work_year: Some(year),
            experience_level: Some("SE".to_string()),
            employment_type: Some("FT".to_string()),
            salary_in_usd: Some(100_000.0),
            employee_residence: Some("US".to_string()),
            remote_ratio: Some(0),
            company_size: Some("M".to_string()),
            job_title: Some(title_for(year)),
        }
    }

    fn title_for(year: i64) -> String {
        format!("Job {year}")
    }

    #[test]
    fn starts_unfiltered_with_select_all_defaults() {
        let records = vec![record(2022, "A"), record(2023, "B")];
        let cleaned = vec![cleaned_row(2022), cleaned_row(2023)];
        let state = DashboardState::new(records, cleaned);
        assert_eq!(state.filtered().len(), 2);
        assert_eq!(state.revision(), 0);
        assert_eq!(state.options().years, [2022, 2023]);
    }

    #[test]
    fn selection_changes_bump_the_revision_and_refilter() {
        let records = vec![record(2022, "A"), record(2023, "B")];
        let cleaned = vec![cleaned_row(2022), cleaned_row(2023)];
        let mut state = DashboardState::new(records, cleaned);

        let mut selection = state.selection().clone();
        selection.years = [2023].into_iter().collect();
        state.set_selection(selection.clone());
        assert_eq!(state.revision(), 1);
        assert_eq!(state.filtered().len(), 1);

        // Re-installing the same selection is a no-op.
        state.set_selection(selection);
        assert_eq!(state.revision(), 1);
    }
}
