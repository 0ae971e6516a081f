use crate::charts::ChartError;
use crate::config::ConfigError;
use crate::export::ExportError;
use thiserror::Error;

/// Any failure that aborts a run.
///
/// Each stage keeps its own error type; this enum only collects them so
/// `main` has one thing to report.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The catalog table could not be written or read.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// A chart could not be rendered.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// The console report could not be written.
    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
}
