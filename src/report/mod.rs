//! Text rendering of the analysis.

pub mod console;
pub mod format;

pub use console::*;
