//! # Lifecycle
//!
//! Process-level plumbing: logging setup and the [`Pipeline`] that drives a
//! run from configuration to files on disk.
//!
//! ```text
//! Config ──validate──▶ Pipeline
//!                        │ generate ──▶ Catalog
//!                        │ analyze  ──▶ CatalogAnalysis
//!                        │ persist  ──▶ product_analysis_data.csv
//!                        │ report   ──▶ ConsoleReport (stdout)
//!                        └ charts   ──▶ chart1..6.{png,svg}
//! ```
//!
//! Every stage error converts into [`PipelineError`] through `#[from]`, so
//! stages compose with `?` and `main` reports a single error type.

pub mod error;
pub mod pipeline;
pub mod tracing;

pub use error::*;
pub use pipeline::*;
pub use self::tracing::setup_tracing;
