//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the whole run.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every pipeline stage runs inside its own span, so each log line shows which stage
//! produced it.
//!
//! ## Configuration
//!
//! Logs use a compact format that hides the crate/module prefix (`with_target(false)`)
//! and go to **stderr**. Stdout is reserved for the console report, so the report can be
//! redirected to a file without log noise.
//!
//! - **Structured logging** with `tracing` crate
//! - **Stage spans** (`generate`, `analyze`, `persist`, `charts`)
//! - **Configurable log levels** via `RUST_LOG` environment variable (default `info`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Stage summaries (default)
//! catalog-analytics run
//!
//! # Per-category generation spans and full config payloads
//! RUST_LOG=debug catalog-analytics run
//!
//! # Only warnings and errors
//! RUST_LOG=warn catalog-analytics run > report.txt
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO generate: Catalog generated rows=1520 today=2026-02-14
//! INFO analyze: Analysis complete categories=8 critical=11 opportunities=9
//! INFO persist: Catalog written path=./product_analysis_data.csv rows=1520
//! INFO charts: Chart saved path=./chart1_category_revenue.png
//! ```
//!
//! Functions log full payloads **once** at `debug` (`debug!(?config, ...)`); everything
//! else stays at one summary line per step.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before the pipeline starts.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Spans already name the stage
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
