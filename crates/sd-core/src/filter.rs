//! Sidebar filter options and the filter engine

use std::collections::BTreeSet;

use crate::record::{RawRecord, Record};

/// Distinct values offered for each sidebar control, sorted.
///
/// Years come from the cleaned table; the categorical columns from the
/// normalized table, so the controls list display labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub years: Vec<i64>,
    pub experience_levels: Vec<String>,
    pub employment_types: Vec<String>,
    pub company_sizes: Vec<String>,
}

impl FilterOptions {
    pub fn from_tables(cleaned: &[RawRecord], records: &[Record]) -> Self {
        let years: Vec<i64> = cleaned
            .iter()
            .filter_map(|r| r.work_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            years,
            experience_levels: distinct(records.iter().map(|r| r.experience_level.as_deref())),
            employment_types: distinct(records.iter().map(|r| r.employment_type.as_deref())),
            company_sizes: distinct(records.iter().map(|r| r.company_size.as_deref())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The user's current selection, one subset per filterable column.
///
/// An empty subset on any dimension matches nothing; there is no
/// "empty means all" shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub years: BTreeSet<i64>,
    pub experience_levels: BTreeSet<String>,
    pub employment_types: BTreeSet<String>,
    pub company_sizes: BTreeSet<String>,
}

impl FilterSelection {
    /// The default selection: every offered value, i.e. no filtering.
    pub fn select_all(options: &FilterOptions) -> Self {
        Self {
            years: options.years.iter().copied().collect(),
            experience_levels: options.experience_levels.iter().cloned().collect(),
            employment_types: options.employment_types.iter().cloned().collect(),
            company_sizes: options.company_sizes.iter().cloned().collect(),
        }
    }

    /// A row matches when all four of its field values are members of
    /// the corresponding subsets. A missing field fails its test.
    pub fn matches(&self, record: &Record) -> bool {
        let year = record.work_year.map_or(false, |y| self.years.contains(&y));
        let experience = record
            .experience_level
            .as_deref()
            .map_or(false, |v| self.experience_levels.contains(v));
        let employment = record
            .employment_type
            .as_deref()
            .map_or(false, |v| self.employment_types.contains(v));
        let size = record
            .company_size
            .as_deref()
            .map_or(false, |v| self.company_sizes.contains(v));

        year && experience && employment && size
    }

    /// Compute the filtered view from scratch.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i64, experience: &str, employment: &str, size: &str) -> Record {
        Record {
            work_year: Some(year),
            experience_level: Some(experience.to_string()),
            employment_type: Some(employment.to_string()),
            company_size: Some(size.to_string()),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(2023, "Senior", "Full-time", "Medium"),
            record(2022, "Junior", "Full-time", "Small"),
            record(2023, "Mid", "Contract", "Large"),
        ]
    }

    fn all_of(records: &[Record]) -> FilterSelection {
        let cleaned: Vec<RawRecord> = records
            .iter()
            .map(|r| RawRecord {
                work_year: r.work_year,
                ..RawRecord::default()
            })
            .collect();
        FilterSelection::select_all(&FilterOptions::from_tables(&cleaned, records))
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let records = sample();
        let cleaned: Vec<RawRecord> = Vec::new();
        let options = FilterOptions::from_tables(&cleaned, &records);
        assert!(options.years.is_empty());
        assert_eq!(options.experience_levels, ["Junior", "Mid", "Senior"]);
        assert_eq!(options.employment_types, ["Contract", "Full-time"]);
        assert_eq!(options.company_sizes, ["Large", "Medium", "Small"]);
    }

    #[test]
    fn default_selection_keeps_every_row() {
        let records = sample();
        let selection = all_of(&records);
        assert_eq!(selection.apply(&records).len(), records.len());
    }

    #[test]
    fn narrowing_one_dimension_is_an_and_across_all() {
        let records = sample();
        let mut selection = all_of(&records);
        selection.years = [2023].into_iter().collect();
        let filtered = selection.apply(&records);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.work_year == Some(2023)));

        selection.company_sizes = ["Medium".to_string()].into_iter().collect();
        let filtered = selection.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].experience_level.as_deref(), Some("Senior"));
    }

    #[test]
    fn empty_selection_on_any_dimension_matches_nothing() {
        let records = sample();
        let mut selection = all_of(&records);
        selection.employment_types.clear();
        assert!(selection.apply(&records).is_empty());
    }

    #[test]
    fn missing_field_fails_its_membership_test() {
        let records = sample();
        let selection = all_of(&records);
        let mut orphan = records[0].clone();
        orphan.work_year = None;
        assert!(!selection.matches(&orphan));
    }

    #[test]
    fn widening_a_selection_never_shrinks_the_result() {
        let records = sample();
        let mut narrow = all_of(&records);
        narrow.years = [2022].into_iter().collect();
        let narrow_rows = narrow.apply(&records);

        let mut wide = narrow.clone();
        wide.years.insert(2023);
        let wide_rows = wide.apply(&records);

        assert!(wide_rows.len() >= narrow_rows.len());
        for row in &narrow_rows {
            assert!(wide_rows.contains(row));
        }
    }
}
