//! Chart panels

pub mod colors;
mod country_map;
mod histogram;
mod remote_donut;
mod top_titles;

pub use country_map::{CountryMapConfig, CountryMapView};
pub use histogram::{SalaryHistogramConfig, SalaryHistogramView};
pub use remote_donut::{RemoteDonutConfig, RemoteDonutView};
pub use top_titles::{TopTitlesConfig, TopTitlesView};
