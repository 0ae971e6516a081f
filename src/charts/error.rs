use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering charts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The output directory could not be created.
    #[error("Failed to create chart directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedded chart font could not be loaded.
    #[error("Failed to register chart font: {0}")]
    Font(String),

    /// The backend rejected a drawing operation or failed to save the image.
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

impl ChartError {
    /// Prefixes a drawing failure with the chart it came from.
    pub(crate) fn in_chart(self, chart: &str) -> Self {
        match self {
            ChartError::Drawing(message) => ChartError::Drawing(format!("{chart}: {message}")),
            other => other,
        }
    }
}

// Backend error types differ per backend; only the message survives.
impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}
