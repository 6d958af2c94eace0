//! Headline metrics shown above the charts

use indexmap::IndexMap;

use crate::record::Record;

/// The four metric-card values.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub average_salary: f64,
    pub max_salary: f64,
    pub total_records: usize,
    pub most_frequent_job: String,
}

impl SummaryMetrics {
    /// Compute the metrics over the full normalized table.
    ///
    /// The degenerate-case guard looks at the *cleaned* table's
    /// emptiness even though the values are read from the unfiltered
    /// table; keep it that way.
    pub fn compute(records: &[Record], cleaned_is_empty: bool) -> Self {
        if cleaned_is_empty {
            return Self {
                average_salary: 0.0,
                max_salary: 0.0,
                total_records: 0,
                most_frequent_job: String::new(),
            };
        }

        let salaries: Vec<f64> = records.iter().filter_map(|r| r.salary_in_usd).collect();
        let average_salary = if salaries.is_empty() {
            0.0
        } else {
            salaries.iter().sum::<f64>() / salaries.len() as f64
        };
        let max_salary = salaries.iter().copied().fold(0.0, f64::max);

        // Frequency map in first-encountered order; ties keep the
        // earliest title.
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for title in records.iter().filter_map(|r| r.job_title.as_deref()) {
            *counts.entry(title).or_insert(0) += 1;
        }
        let mut most_frequent_job = String::new();
        let mut best = 0usize;
        for (title, count) in &counts {
            if *count > best {
                best = *count;
                most_frequent_job = (*title).to_string();
            }
        }

        Self {
            average_salary,
            max_salary,
            total_records: records.len(),
            most_frequent_job,
        }
    }
}

/// Format a dollar amount as `$N,NNN`, rounded to whole dollars.
pub fn format_usd(value: f64) -> String {
    format!("${}", group_thousands(value.round() as i64))
}

/// Format a row count as `N,NNN`.
pub fn format_count(value: usize) -> String {
    group_thousands(value as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(salary: f64, title: &str) -> Record {
        Record {
            salary_in_usd: Some(salary),
            job_title: Some(title.to_string()),
            ..Record::default()
        }
    }

    #[test]
    fn computes_mean_max_count_and_mode() {
        let records = vec![
            row(100_000.0, "Data Scientist"),
            row(60_000.0, "Data Analyst"),
            row(140_000.0, "Data Scientist"),
        ];
        let metrics = SummaryMetrics::compute(&records, false);
        assert_eq!(metrics.average_salary, 100_000.0);
        assert_eq!(metrics.max_salary, 140_000.0);
        assert_eq!(metrics.total_records, 3);
        assert_eq!(metrics.most_frequent_job, "Data Scientist");
    }

    #[test]
    fn cleaned_empty_guard_zeroes_everything() {
        let records = vec![row(100_000.0, "Data Scientist")];
        let metrics = SummaryMetrics::compute(&records, true);
        assert_eq!(metrics.average_salary, 0.0);
        assert_eq!(metrics.max_salary, 0.0);
        assert_eq!(metrics.total_records, 0);
        assert_eq!(metrics.most_frequent_job, "");
    }

    #[test]
    fn mode_ties_keep_the_first_encountered_title() {
        let records = vec![
            row(1.0, "ML Engineer"),
            row(1.0, "Data Analyst"),
            row(1.0, "Data Analyst"),
            row(1.0, "ML Engineer"),
        ];
        let metrics = SummaryMetrics::compute(&records, false);
        assert_eq!(metrics.most_frequent_job, "ML Engineer");
    }

    #[test]
    fn missing_salaries_are_skipped_by_the_mean() {
        let mut records = vec![row(100_000.0, "Data Scientist")];
        records.push(Record {
            job_title: Some("Data Analyst".to_string()),
            ..Record::default()
        });
        let metrics = SummaryMetrics::compute(&records, false);
        assert_eq!(metrics.average_salary, 100_000.0);
        assert_eq!(metrics.total_records, 2);
    }

    #[test]
    fn formats_group_thousands() {
        assert_eq!(format_usd(150_000.0), "$150,000");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1_234_567.9), "$1,234,568");
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12_345), "12,345");
    }
}
