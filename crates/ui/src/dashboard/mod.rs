//! The single dashboard page: identity fields, agency checklist, overview
//! donut, submit button, status line, and for a non-empty selection the
//! cost banner and Sankey.

mod panels;
mod ui_system;

pub use panels::PAGE_TITLE;
pub use ui_system::dashboard_ui;
