//! Presentation views and the CSV match report.

mod report;
pub mod views;

pub use report::{report_filename, ReportWriter};
pub use views::{AgencySummaryView, MatchView};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report CSV: {0}")]
    Csv(#[from] csv::Error),
}
