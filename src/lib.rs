// src/lib.rs
//! Converts loosely-structured markdown reports (produced by an upstream
//! language-model agent) into a styled HTML document plus summary metrics.
//!
//! The interesting part is the extraction layer: pipe tables become
//! [`extractors::Record`]s, keyword-addressed headings yield section prose
//! and bullet lists, and bolded labels yield quoted message scripts. The
//! [`report`] layer folds those into KPIs and a themed HTML email. All
//! extraction degrades to empty results on malformed input; nothing fails.

pub mod extractors;
pub mod input;
pub mod report;
pub mod utils;

pub use report::{build_report, ReportConfig, ReportOutput};
pub use utils::AppError;
