//! CSV loading for the salary table

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use sd_core::RawRecord;

use crate::DataError;

/// The loaded salary table: every parsed row plus the cleaned subset.
#[derive(Debug, Clone, Default)]
pub struct SalaryTable {
    /// One entry per CSV data line, in file order.
    pub raw: Vec<RawRecord>,
    /// The rows of `raw` with no missing column, in the same order.
    pub cleaned: Vec<RawRecord>,
}

/// Read the salary table from `path`.
///
/// A missing file or malformed CSV aborts startup; there is no
/// recovery path.
pub fn load_salary_table(path: &Path) -> Result<SalaryTable, DataError> {
    let file = File::open(path)?;
    let table = parse_salary_table(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        rows = table.raw.len(),
        complete = table.cleaned.len(),
        "loaded salary table"
    );
    Ok(table)
}

/// Parse CSV text into the raw table and derive the cleaned subset.
///
/// Columns are matched by header name; columns outside the schema are
/// ignored. Empty fields become `None`.
pub fn parse_salary_table(reader: impl Read) -> Result<SalaryTable, DataError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut raw = Vec::new();
    for result in csv_reader.deserialize() {
        let record: RawRecord = result?;
        raw.push(record);
    }

    let cleaned: Vec<RawRecord> = raw.iter().filter(|r| r.is_complete()).cloned().collect();
    Ok(SalaryTable { raw, cleaned })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "work_year,experience_level,employment_type,salary_in_usd,employee_residence,remote_ratio,company_size,job_title";

    #[test]
    fn parses_rows_and_splits_off_the_cleaned_subset() {
        let csv = format!(
            "{HEADER}\n\
             2023,SE,FT,150000,US,100,M,Data Scientist\n\
             ,EN,FT,60000,BR,0,S,Data Analyst\n\
             2022,MI,CT,90000,DE,50,L,ML Engineer\n"
        );
        let table = parse_salary_table(csv.as_bytes()).expect("well-formed csv");
        assert_eq!(table.raw.len(), 3);
        assert_eq!(table.cleaned.len(), 2);

        let first = &table.raw[0];
        assert_eq!(first.work_year, Some(2023));
        assert_eq!(first.experience_level.as_deref(), Some("SE"));
        assert_eq!(first.salary_in_usd, Some(150_000.0));
        assert_eq!(first.remote_ratio, Some(100));

        // The year-less row survives the raw table but not the cleaned one.
        assert_eq!(table.raw[1].work_year, None);
        assert!(table.cleaned.iter().all(|r| r.is_complete()));
    }

    #[test]
    fn cleaned_rows_are_a_subset_of_the_raw_table() {
        let csv = format!(
            "{HEADER}\n\
             2023,SE,FT,150000,US,100,M,Data Scientist\n\
             2021,,FT,,GB,0,M,Data Engineer\n"
        );
        let table = parse_salary_table(csv.as_bytes()).expect("well-formed csv");
        for row in &table.cleaned {
            assert!(table.raw.contains(row));
        }
    }

    #[test]
    fn columns_outside_the_schema_are_ignored() {
        let csv = "work_year,experience_level,employment_type,salary_in_usd,employee_residence,remote_ratio,company_size,job_title,salary_currency\n\
                   2023,SE,FT,150000,US,100,M,Data Scientist,USD\n";
        let table = parse_salary_table(csv.as_bytes()).expect("well-formed csv");
        assert_eq!(table.raw.len(), 1);
        assert_eq!(table.raw[0].job_title.as_deref(), Some("Data Scientist"));
    }

    #[test]
    fn malformed_numbers_fail_the_parse() {
        let csv = format!("{HEADER}\nnot-a-year,SE,FT,150000,US,100,M,Data Scientist\n");
        let err = parse_salary_table(csv.as_bytes()).expect_err("bad year");
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn a_missing_file_is_an_io_error() {
        let err = load_salary_table(Path::new("does/not/exist.csv")).expect_err("missing file");
        assert!(matches!(err, DataError::Io(_)));
    }
}
