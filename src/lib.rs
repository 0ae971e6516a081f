//! # Catalog Analytics
//!
//! > **Synthetic storefront data, analyzed end to end.**
//!
//! This crate generates a reproducible product catalog for a home-and-fashion storefront
//! (1520 products across 8 categories), aggregates it into the views a merchandising team
//! reads every month, prints a console report, persists the table as CSV and renders six
//! charts.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Data first, presentation last
//!
//! The pipeline is a straight line of pure steps:
//! - **Generation** turns a validated [`GeneratorConfig`](config::GeneratorConfig), a seed and
//!   a date into a [`Catalog`](model::Catalog). Nothing else influences the rows.
//! - **Analysis** derives every view from the immutable catalog. The console report and the
//!   charts call the same functions, so their numbers always agree.
//! - **Presentation** (report, CSV, charts) only formats what analysis produced.
//!
//! ### Tables as configuration
//!
//! Category price ranges, tier probabilities and vocabularies are data, not code. The
//! reference values are the `Default`s of the config types; a TOML file overrides any subset
//! and is validated before the first row is drawn.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer defines its own error type ([`ConfigError`](config::ConfigError),
//! [`ExportError`](export::ExportError), [`ChartError`](charts::ChartError)). The pipeline
//! collects them in [`PipelineError`](lifecycle::PipelineError) via `#[from]`.
//!
//! ### 2. Explicit Randomness
//! The random source is a value passed into the generator, never global state. Same seed and
//! same date give byte-identical CSV output.
//!
//! ### 3. Missing Values
//! Averages and shares over empty groups are `NaN` and print as `n/a`.
//!
//! ### 4. Observability
//! `tracing` spans wrap every pipeline stage; logs go to stderr so the report on stdout stays
//! clean. See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`config`])
//! - **Role**: The row type, the closed vocabularies and the tables rows are drawn from.
//! - **Key items**: [`Product`](model::Product), [`Catalog`](model::Catalog),
//!   [`Config`](config::Config).
//!
//! ### 2. The Engine ([`generator`], [`analysis`])
//! - **Role**: Draw the catalog; derive overview, category, price band, stock and rating views.
//! - **Key items**: [`CatalogGenerator`](generator::CatalogGenerator),
//!   [`CatalogAnalysis`](analysis::CatalogAnalysis).
//!
//! ### 3. The Outputs ([`report`], [`export`], [`charts`])
//! - **Role**: Console report, CSV persistence and the six charts.
//! - **Key items**: [`ConsoleReport`](report::ConsoleReport),
//!   [`write_catalog`](export::write_catalog), [`render_charts`](charts::render_charts).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Wires the stages together and sets up logging.
//! - **Key items**: [`Pipeline`](lifecycle::Pipeline),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Reference run: report on stdout, CSV and PNG charts in the current directory
//! cargo run --release
//!
//! # Different seed, SVG charts into ./out
//! cargo run --release -- --seed 7 --output-dir out run --format svg
//!
//! # Redraw charts from an earlier CSV
//! cargo run --release -- render --input product_analysis_data.csv
//! ```
//!
//! ## 🧪 Testing
//!
//! Unit tests sit next to each module; `tests/` covers generator invariants (with `proptest`
//! over seeds), the aggregation identities, and full pipeline runs into temporary directories.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod export;
pub mod generator;
pub mod lifecycle;
pub mod model;
pub mod report;
