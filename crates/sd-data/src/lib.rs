//! Loading and preprocessing for the salary dashboard
//!
//! Everything that touches the filesystem lives here: the CSV loader,
//! the cleaning pass, the normalization pass, the static country
//! registry and the footer badge asset.

pub mod assets;
pub mod countries;
pub mod loader;
pub mod normalize;

use thiserror::Error;

// Re-exports
pub use loader::{load_salary_table, parse_salary_table, SalaryTable};
pub use normalize::normalize;

/// Errors that can occur while loading dashboard inputs
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                DataError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => DataError::Csv(error.to_string()),
        }
    }
}
