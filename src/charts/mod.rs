//! # Charts
//!
//! Six report charts, each a type implementing [`Chart`]. A chart is built
//! from a [`Catalog`] (usually through the same aggregation views the console
//! report uses) and can draw itself on any plotters backend, so the same code
//! produces the PNG and the SVG variant.
//!
//! | file stem | chart |
//! |-----------|-------|
//! | `chart1_category_revenue` | [`CategoryRevenueChart`] |
//! | `chart2_price_analysis` | [`PriceAnalysisChart`] |
//! | `chart3_bestsellers` | [`BestsellersChart`] |
//! | `chart4_stock_analysis` | [`StockAnalysisChart`] |
//! | `chart5_customer_ratings` | [`CustomerRatingsChart`] |
//! | `chart6_performance_matrix` | [`PerformanceMatrixChart`] |
//!
//! ## Fonts
//!
//! Bitmap text is rasterized from an embedded copy of DejaVu Sans; SVG output
//! carries every title and label as `<text>`. Both need the fonts registered,
//! since plotters measures labels while laying out the axes.

pub mod bestsellers;
pub mod category_revenue;
pub mod customer_ratings;
pub mod error;
mod fonts;
pub mod palette;
pub mod performance_matrix;
pub mod price_analysis;
pub mod stock_analysis;

pub use bestsellers::*;
pub use category_revenue::*;
pub use customer_ratings::*;
pub use error::*;
pub use performance_matrix::*;
pub use price_analysis::*;
pub use stock_analysis::*;

use crate::model::Catalog;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Image format of the rendered charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// A chart that can draw itself on any plotters backend.
pub trait Chart {
    /// File name without extension.
    const FILE_STEM: &'static str;
    /// Canvas size in pixels.
    const SIZE: (u32, u32);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError>;
}

/// Renders one chart into `dir` and returns the written path.
pub fn render_chart<C: Chart>(
    chart: &C,
    dir: &Path,
    format: ChartFormat,
) -> Result<PathBuf, ChartError> {
    fonts::register_fonts()?;
    let path = dir.join(format!("{}.{}", C::FILE_STEM, format.extension()));
    debug!(path = %path.display(), "Rendering chart");

    let result = match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(&path, C::SIZE).into_drawing_area();
            chart
                .draw(&root)
                .and_then(|()| root.present().map_err(ChartError::from))
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(&path, C::SIZE).into_drawing_area();
            chart
                .draw(&root)
                .and_then(|()| root.present().map_err(ChartError::from))
        }
    };
    result.map_err(|e| e.in_chart(C::FILE_STEM))?;

    info!(path = %path.display(), "Chart saved");
    Ok(path)
}

/// Renders all six charts of `catalog` into `dir`, creating it if needed.
pub fn render_charts(
    catalog: &Catalog,
    dir: &Path,
    format: ChartFormat,
) -> Result<Vec<PathBuf>, ChartError> {
    let _span = info_span!("charts", format = format.extension()).entered();
    std::fs::create_dir_all(dir).map_err(|source| ChartError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = vec![
        render_chart(&CategoryRevenueChart::new(catalog), dir, format)?,
        render_chart(&PriceAnalysisChart::new(catalog), dir, format)?,
        render_chart(&BestsellersChart::new(catalog), dir, format)?,
        render_chart(&StockAnalysisChart::new(catalog), dir, format)?,
        render_chart(&CustomerRatingsChart::new(catalog), dir, format)?,
        render_chart(&PerformanceMatrixChart::new(catalog), dir, format)?,
    ];
    info!(count = paths.len(), dir = %dir.display(), "Charts rendered");
    Ok(paths)
}

/// Label for a category axis whose entries sit at integer positions.
///
/// Non-integer ticks get an empty label.
pub(crate) fn position_label<S: AsRef<str>>(names: &[S], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names
        .get(rounded as usize)
        .map(|n| n.as_ref().to_string())
        .unwrap_or_default()
}

/// Upper axis bound with headroom; never zero so empty data still draws.
pub(crate) fn headroom(max: f64, factor: f64) -> f64 {
    if max.is_finite() && max > 0.0 {
        max * factor
    } else {
        1.0
    }
}
