//! Row types for the salary table

use serde::Deserialize;

/// One row of the salary table as it appears on disk.
///
/// Every column is optional so that incomplete rows survive the load;
/// the cleaning pass drops them afterwards instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawRecord {
    pub work_year: Option<i64>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub salary_in_usd: Option<f64>,
    pub employee_residence: Option<String>,
    pub remote_ratio: Option<i64>,
    pub company_size: Option<String>,
    pub job_title: Option<String>,
}

impl RawRecord {
    /// True when no column is missing.
    pub fn is_complete(&self) -> bool {
        self.work_year.is_some()
            && self.experience_level.is_some()
            && self.employment_type.is_some()
            && self.salary_in_usd.is_some()
            && self.employee_residence.is_some()
            && self.remote_ratio.is_some()
            && self.company_size.is_some()
            && self.job_title.is_some()
    }
}

/// A normalized row: coded columns carry display labels and the derived
/// 3-letter residence code is attached.
///
/// `remote_ratio` switches from its integer code to a label here, and
/// `residence_iso3` is `None` whenever the 2-letter residence code has
/// no registry entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub work_year: Option<i64>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub salary_in_usd: Option<f64>,
    pub employee_residence: Option<String>,
    pub remote_ratio: Option<String>,
    pub company_size: Option<String>,
    pub job_title: Option<String>,
    pub residence_iso3: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_row_has_every_column() {
        let record = RawRecord {
            work_year: Some(2023),
            experience_level: Some("SE".to_string()),
            employment_type: Some("FT".to_string()),
            salary_in_usd: Some(150_000.0),
            employee_residence: Some("US".to_string()),
            remote_ratio: Some(100),
            company_size: Some("M".to_string()),
            job_title: Some("Data Scientist".to_string()),
        };
        assert!(record.is_complete());
    }

    #[test]
    fn any_missing_column_marks_the_row_incomplete() {
        let record = RawRecord {
            work_year: None,
            ..RawRecord::default()
        };
        assert!(!record.is_complete());

        let record = RawRecord {
            work_year: Some(2023),
            experience_level: Some("SE".to_string()),
            employment_type: Some("FT".to_string()),
            salary_in_usd: None,
            employee_residence: Some("US".to_string()),
            remote_ratio: Some(0),
            company_size: Some("M".to_string()),
            job_title: Some("Data Scientist".to_string()),
        };
        assert!(!record.is_complete());
    }
}
