//! User interface chrome for the salary dashboard
//!
//! This crate provides the egui-based chrome around the views: the
//! dark theme, the sidebar filter panel and the page header/footer.

pub mod shell;
pub mod sidebar;
pub mod theme;
pub mod widgets;

// Re-export commonly used types
pub use shell::{page_header, FooterBadge};
pub use sidebar::FilterPanel;
pub use theme::{apply_theme, Theme};
pub use widgets::multi_select;
