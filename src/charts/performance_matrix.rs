use super::palette::{category_color, CAPTION_SIZE, FONT, LABEL_SIZE};
use super::{headroom, Chart, ChartError};
use crate::analysis::category_summary;
use crate::model::{Catalog, Category};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// One bubble: a category placed by volume and revenue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub category: Category,
    pub units: f64,
    pub revenue_millions: f64,
    pub avg_rating: f64,
}

impl Bubble {
    /// Pixel radius; grows with the mean rating.
    pub fn radius(&self) -> i32 {
        if self.avg_rating.is_nan() {
            return 6;
        }
        (self.avg_rating * 6.0).round().clamp(6.0, 30.0) as i32
    }
}

/// Bubble scatter of units sold against revenue, one bubble per category.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMatrixChart {
    pub bubbles: Vec<Bubble>,
}

impl PerformanceMatrixChart {
    pub fn new(catalog: &Catalog) -> Self {
        let bubbles = category_summary(catalog)
            .into_iter()
            .map(|row| Bubble {
                category: row.category,
                units: row.total_units as f64,
                revenue_millions: row.total_revenue / 1e6,
                avg_rating: row.avg_rating,
            })
            .collect();
        Self { bubbles }
    }
}

impl Chart for PerformanceMatrixChart {
    const FILE_STEM: &'static str = "chart6_performance_matrix";
    const SIZE: (u32, u32) = (1200, 800);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let max_units = self.bubbles.iter().map(|b| b.units).fold(0.0, f64::max);
        let max_revenue = self.bubbles.iter().map(|b| b.revenue_millions).fold(0.0, f64::max);

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Category Performance Matrix (Bubble size = Avg Rating)",
                (FONT, CAPTION_SIZE),
            )
            .margin(25)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..headroom(max_units, 1.2), 0.0..headroom(max_revenue, 1.2))?;

        chart
            .configure_mesh()
            .x_desc("Total Units Sold (30 days)")
            .y_desc("Total Revenue (₹ Millions)")
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.1}"))
            .draw()?;

        chart.draw_series(self.bubbles.iter().map(|b| {
            Circle::new(
                (b.units, b.revenue_millions),
                b.radius(),
                category_color(b.category).mix(0.6).filled(),
            )
        }))?;
        chart.draw_series(
            self.bubbles
                .iter()
                .map(|b| Circle::new((b.units, b.revenue_millions), b.radius(), BLACK.stroke_width(1))),
        )?;

        let label_style = TextStyle::from((FONT, LABEL_SIZE).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(self.bubbles.iter().map(|b| {
            Text::new(
                b.category.as_str(),
                (b.units, b.revenue_millions),
                label_style.clone(),
            )
        }))?;

        Ok(())
    }
}
