//! Core domain model and state for the salary dashboard
//!
//! This crate holds the record types, the categorical label mappings,
//! the filter engine and the aggregations the charts are built from.
//! It performs no I/O and draws no UI.

pub mod aggregate;
pub mod filter;
pub mod labels;
pub mod metrics;
pub mod record;
pub mod state;

// Re-export commonly used types
pub use filter::{FilterOptions, FilterSelection};
pub use labels::{CompanySize, EmploymentType, ExperienceLevel, RemoteRatio};
pub use metrics::{format_count, format_usd, SummaryMetrics};
pub use record::{RawRecord, Record};
pub use state::{DashboardState, SharedState};
