//! One-time normalization pass over the raw table

use sd_core::labels;
use sd_core::{RawRecord, Record};

use crate::countries;

/// Produce the display-ready table.
///
/// Categorical codes become labels (unknown codes pass through) and the
/// 3-letter residence code is derived from the *original* 2-letter
/// codes. A residence with no registry entry gets `None` rather than an
/// error. Pure: the raw table is left untouched.
pub fn normalize(raw: &[RawRecord]) -> Vec<Record> {
    raw.iter().map(normalize_record).collect()
}

fn normalize_record(record: &RawRecord) -> Record {
    Record {
        work_year: record.work_year,
        experience_level: record
            .experience_level
            .as_deref()
            .map(labels::experience_label),
        employment_type: record
            .employment_type
            .as_deref()
            .map(labels::employment_label),
        salary_in_usd: record.salary_in_usd,
        employee_residence: record.employee_residence.clone(),
        remote_ratio: record.remote_ratio.map(labels::remote_label),
        company_size: record
            .company_size
            .as_deref()
            .map(labels::company_size_label),
        job_title: record.job_title.clone(),
        residence_iso3: record
            .employee_residence
            .as_deref()
            .and_then(countries::alpha3)
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(experience: &str, remote: i64, residence: &str) -> RawRecord {
        RawRecord {
            work_year: Some(2023),
            experience_level: Some(experience.to_string()),
            employment_type: Some("FT".to_string()),
            salary_in_usd: Some(150_000.0),
            employee_residence: Some(residence.to_string()),
            remote_ratio: Some(remote),
            company_size: Some("M".to_string()),
            job_title: Some("Data Scientist".to_string()),
        }
    }

    #[test]
    fn codes_become_display_labels() {
        let records = normalize(&[raw("SE", 100, "US")]);
        let record = &records[0];
        assert_eq!(record.experience_level.as_deref(), Some("Senior"));
        assert_eq!(record.employment_type.as_deref(), Some("Full-time"));
        assert_eq!(record.company_size.as_deref(), Some("Medium"));
        assert_eq!(record.remote_ratio.as_deref(), Some("Remote"));
    }

    #[test]
    fn residence_codes_gain_a_derived_iso3() {
        let records = normalize(&[raw("SE", 0, "US"), raw("EN", 0, "BR")]);
        assert_eq!(records[0].residence_iso3.as_deref(), Some("USA"));
        assert_eq!(records[1].residence_iso3.as_deref(), Some("BRA"));
        // The 2-letter column itself is untouched.
        assert_eq!(records[0].employee_residence.as_deref(), Some("US"));
    }

    #[test]
    fn unknown_codes_pass_through_and_unknown_residences_map_to_none() {
        let records = normalize(&[raw("ZZ", 25, "XX")]);
        let record = &records[0];
        assert_eq!(record.experience_level.as_deref(), Some("ZZ"));
        assert_eq!(record.remote_ratio.as_deref(), Some("25"));
        assert_eq!(record.residence_iso3, None);
    }

    #[test]
    fn missing_fields_stay_missing() {
        let records = normalize(&[RawRecord::default()]);
        let record = &records[0];
        assert_eq!(record.experience_level, None);
        assert_eq!(record.remote_ratio, None);
        assert_eq!(record.residence_iso3, None);
    }
}
