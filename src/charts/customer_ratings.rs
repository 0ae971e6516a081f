use super::palette::{rating_color, CAPTION_SIZE, FONT, LABEL_SIZE};
use super::{position_label, Chart, ChartError};
use crate::analysis::{mean, rating_summary};
use crate::model::{Catalog, Category};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

pub const RATING_AXIS: (f64, f64) = (3.5, 5.0);
pub const BENCHMARK_RATING: f64 = 4.0;

/// Mean customer rating per category against the 4.0 benchmark and the
/// catalog-wide average.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRatingsChart {
    /// Highest rated first.
    pub bars: Vec<(Category, f64)>,
    pub overall: f64,
}

impl CustomerRatingsChart {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            bars: rating_summary(catalog)
                .into_iter()
                .map(|row| (row.category, row.avg_rating))
                .collect(),
            overall: mean(catalog.iter().map(|p| p.rating)),
        }
    }
}

impl Chart for CustomerRatingsChart {
    const FILE_STEM: &'static str = "chart5_customer_ratings";
    const SIZE: (u32, u32) = (1200, 700);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let n = self.bars.len();
        let names: Vec<&str> = self.bars.iter().rev().map(|(c, _)| c.as_str()).collect();
        let (lo, hi) = RATING_AXIS;
        let y_top = (n as f64 - 0.5).max(0.5);

        let mut chart = ChartBuilder::on(root)
            .caption("Average Customer Rating by Category", (FONT, CAPTION_SIZE))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(110)
            .build_cartesian_2d(lo..hi, -0.5..y_top)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(n.max(1))
            .y_label_formatter(&|y| position_label(&names, *y))
            .x_desc("Average Rating (out of 5.0)")
            .draw()?;

        // Bars start at the left edge of the axis; ratings never go below it.
        chart.draw_series(self.bars.iter().enumerate().map(|(rank, (_, rating))| {
            let y = (n - 1 - rank) as f64;
            let end = rating.clamp(lo, hi);
            Rectangle::new([(lo, y - 0.35), (end, y + 0.35)], rating_color(*rating).filled())
        }))?;

        let value_style = TextStyle::from((FONT, LABEL_SIZE).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(self.bars.iter().enumerate().map(|(rank, (_, rating))| {
            let y = (n - 1 - rank) as f64;
            Text::new(format!(" {rating:.2}"), (rating.clamp(lo, hi), y), value_style.clone())
        }))?;

        let benchmark = RED.stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                [(BENCHMARK_RATING, -0.5), (BENCHMARK_RATING, y_top)],
                benchmark,
            ))?
            .label("Benchmark (4.0)")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], benchmark));

        if !self.overall.is_nan() {
            let average = BLUE.stroke_width(2);
            chart
                .draw_series(LineSeries::new(
                    [(self.overall, -0.5), (self.overall, y_top)],
                    average,
                ))?
                .label(format!("Overall Avg ({:.2})", self.overall))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], average));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::small_catalog;

    #[test]
    fn test_bars_sorted_by_rating() {
        let chart = CustomerRatingsChart::new(&small_catalog());
        assert_eq!(chart.bars[0], (Category::Men, 4.5));
        assert!(chart.bars.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!((chart.overall - 30.2 / 7.0).abs() < 1e-9);
    }
}
