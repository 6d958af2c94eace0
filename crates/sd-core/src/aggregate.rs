//! Chart-facing aggregations over the filtered and cleaned tables
//!
//! Every function here is pure and deterministic: groups are built in
//! sorted-key or first-encountered order so that re-running on the same
//! input yields identical output.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::record::{RawRecord, Record};

/// The job title the per-country chart is restricted to.
pub const FOCUS_JOB_TITLE: &str = "Data Scientist";

/// Mean salary per job title, the `cap` highest means only, ordered
/// ascending by mean for a smallest-to-largest horizontal bar layout.
///
/// Rows missing a title or a salary are skipped. Ties at the cut keep
/// the alphabetically earlier title.
pub fn top_job_titles(records: &[Record], cap: usize) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        if let (Some(title), Some(salary)) = (record.job_title.as_deref(), record.salary_in_usd) {
            let entry = groups.entry(title).or_insert((0.0, 0));
            entry.0 += salary;
            entry.1 += 1;
        }
    }

    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(title, (sum, count))| (title.to_string(), sum / count as f64))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(cap);
    means.reverse();
    means
}

/// Equal-width histogram bins over `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBins {
    pub start: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

impl SalaryBins {
    /// Center of bin `i`, for bar placement.
    pub fn center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.width
    }
}

/// Histogram of `salary_in_usd` over the cleaned table.
///
/// The last bin is right-inclusive so the maximum lands in it rather
/// than overflowing. All-equal input collapses to a single occupied bin.
pub fn salary_histogram(records: &[RawRecord], num_bins: usize) -> Option<SalaryBins> {
    let values: Vec<f64> = records.iter().filter_map(|r| r.salary_in_usd).collect();
    if values.is_empty() || num_bins == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / num_bins as f64
    } else {
        1.0
    };

    let mut counts = vec![0usize; num_bins];
    for &value in &values {
        let mut idx = ((value - min) / width) as usize;
        if idx >= num_bins {
            idx = num_bins - 1;
        }
        counts[idx] += 1;
    }

    Some(SalaryBins {
        start: min,
        width,
        counts,
    })
}

/// Row count per remote-ratio label over the filtered view, ordered by
/// descending count. Ties keep first-encountered order.
pub fn remote_ratio_counts(records: &[Record]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for label in records.iter().filter_map(|r| r.remote_ratio.as_deref()) {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Mean salary per 3-letter residence code for rows whose job title is
/// exactly `job_title`, ordered by country code.
///
/// Rows without a derived residence code are dropped from the grouping.
pub fn country_mean_salary(records: &[Record], job_title: &str) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        if record.job_title.as_deref() != Some(job_title) {
            continue;
        }
        if let (Some(iso3), Some(salary)) = (record.residence_iso3.as_deref(), record.salary_in_usd)
        {
            let entry = groups.entry(iso3).or_insert((0.0, 0));
            entry.0 += salary;
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(iso3, (sum, count))| (iso3.to_string(), sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, salary: f64) -> Record {
        Record {
            job_title: Some(title.to_string()),
            salary_in_usd: Some(salary),
            ..Record::default()
        }
    }

    #[test]
    fn top_titles_orders_ascending_by_mean() {
        let records = vec![
            row("Data Analyst", 60_000.0),
            row("Data Scientist", 150_000.0),
            row("Data Scientist", 130_000.0),
            row("ML Engineer", 170_000.0),
        ];
        let top = top_job_titles(&records, 10);
        assert_eq!(
            top,
            vec![
                ("Data Analyst".to_string(), 60_000.0),
                ("Data Scientist".to_string(), 140_000.0),
                ("ML Engineer".to_string(), 170_000.0),
            ]
        );
    }

    #[test]
    fn top_titles_caps_the_group_count() {
        let records: Vec<Record> = (0..15)
            .map(|i| row(&format!("Title {i:02}"), 1_000.0 * i as f64))
            .collect();
        let top = top_job_titles(&records, 10);
        assert_eq!(top.len(), 10);
        // Lowest five means fell off; what remains ascends.
        assert_eq!(top[0].1, 5_000.0);
        assert_eq!(top[9].1, 14_000.0);
    }

    #[test]
    fn a_single_title_yields_a_single_bar_despite_the_cap() {
        let records = vec![row("Data Scientist", 100.0), row("Data Scientist", 200.0)];
        let top = top_job_titles(&records, 10);
        assert_eq!(top, vec![("Data Scientist".to_string(), 150.0)]);
    }

    #[test]
    fn histogram_spreads_values_over_thirty_bins() {
        let records: Vec<RawRecord> = (0..300)
            .map(|i| RawRecord {
                salary_in_usd: Some(1_000.0 + i as f64 * 500.0),
                ..RawRecord::default()
            })
            .collect();
        let bins = salary_histogram(&records, 30).expect("non-empty input");
        assert_eq!(bins.counts.len(), 30);
        assert_eq!(bins.counts.iter().sum::<usize>(), 300);
        // Equal spacing puts the same number of values in every bin.
        assert!(bins.counts.iter().all(|&c| c == 10));
    }

    #[test]
    fn histogram_puts_the_maximum_in_the_last_bin() {
        let records = vec![
            RawRecord {
                salary_in_usd: Some(0.0),
                ..RawRecord::default()
            },
            RawRecord {
                salary_in_usd: Some(30.0),
                ..RawRecord::default()
            },
        ];
        let bins = salary_histogram(&records, 30).expect("non-empty input");
        assert_eq!(bins.counts[0], 1);
        assert_eq!(bins.counts[29], 1);
    }

    #[test]
    fn histogram_of_nothing_is_none() {
        assert!(salary_histogram(&[], 30).is_none());
        let no_salary = vec![RawRecord::default()];
        assert!(salary_histogram(&no_salary, 30).is_none());
    }

    #[test]
    fn histogram_of_identical_values_collapses_to_one_bin() {
        let records: Vec<RawRecord> = (0..5)
            .map(|_| RawRecord {
                salary_in_usd: Some(90_000.0),
                ..RawRecord::default()
            })
            .collect();
        let bins = salary_histogram(&records, 30).expect("non-empty input");
        assert_eq!(bins.counts[0], 5);
        assert_eq!(bins.counts[1..].iter().sum::<usize>(), 0);
    }

    #[test]
    fn remote_counts_order_by_descending_count() {
        let mut records = Vec::new();
        for label in ["Hybrid", "Remote", "Remote", "Office", "Remote", "Office"] {
            records.push(Record {
                remote_ratio: Some(label.to_string()),
                ..Record::default()
            });
        }
        let counts = remote_ratio_counts(&records);
        assert_eq!(
            counts,
            vec![
                ("Remote".to_string(), 3),
                ("Office".to_string(), 2),
                ("Hybrid".to_string(), 1),
            ]
        );
    }

    #[test]
    fn re_running_an_aggregation_yields_identical_output() {
        let records = vec![
            row("Data Analyst", 60_000.0),
            row("Data Scientist", 60_000.0),
            row("ML Engineer", 170_000.0),
        ];
        assert_eq!(top_job_titles(&records, 10), top_job_titles(&records, 10));
        assert_eq!(remote_ratio_counts(&records), remote_ratio_counts(&records));
    }

    #[test]
    fn country_means_only_cover_the_focus_title() {
        let mut ds_us = row(FOCUS_JOB_TITLE, 150_000.0);
        ds_us.residence_iso3 = Some("USA".to_string());
        let mut ds_us2 = row(FOCUS_JOB_TITLE, 130_000.0);
        ds_us2.residence_iso3 = Some("USA".to_string());
        let mut ds_br = row(FOCUS_JOB_TITLE, 60_000.0);
        ds_br.residence_iso3 = Some("BRA".to_string());
        let mut analyst = row("Data Analyst", 999_999.0);
        analyst.residence_iso3 = Some("USA".to_string());
        let unmapped = row(FOCUS_JOB_TITLE, 70_000.0);

        let records = vec![ds_us, ds_us2, ds_br, analyst, unmapped];
        let means = country_mean_salary(&records, FOCUS_JOB_TITLE);
        assert_eq!(
            means,
            vec![
                ("BRA".to_string(), 60_000.0),
                ("USA".to_string(), 140_000.0),
            ]
        );
    }
}
