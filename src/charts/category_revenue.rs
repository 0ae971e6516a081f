use super::palette::{category_color, CAPTION_SIZE, FONT, LABEL_SIZE};
use super::{headroom, position_label, Chart, ChartError};
use crate::analysis::category_summary;
use crate::model::{Catalog, Category};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Horizontal bars of 30-day revenue per category, largest on top.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRevenueChart {
    /// (category, revenue in millions), descending.
    pub bars: Vec<(Category, f64)>,
}

impl CategoryRevenueChart {
    pub fn new(catalog: &Catalog) -> Self {
        let bars = category_summary(catalog)
            .into_iter()
            .map(|row| (row.category, row.total_revenue / 1e6))
            .collect();
        Self { bars }
    }
}

impl Chart for CategoryRevenueChart {
    const FILE_STEM: &'static str = "chart1_category_revenue";
    const SIZE: (u32, u32) = (1200, 700);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let n = self.bars.len();
        // Rank 0 is drawn at the top.
        let names: Vec<&str> = self.bars.iter().rev().map(|(c, _)| c.as_str()).collect();
        let max = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Revenue by Category (Last 30 Days)",
                (FONT, CAPTION_SIZE).into_font().style(FontStyle::Bold),
            )
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(110)
            .build_cartesian_2d(0.0..headroom(max, 1.15), -0.5..(n as f64 - 0.5).max(0.5))?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(n.max(1))
            .y_label_formatter(&|y| position_label(&names, *y))
            .x_desc("Revenue (₹ Millions)")
            .draw()?;

        chart.draw_series(self.bars.iter().enumerate().map(|(rank, (category, value))| {
            let y = (n - 1 - rank) as f64;
            Rectangle::new([(0.0, y - 0.35), (*value, y + 0.35)], category_color(*category).filled())
        }))?;

        let value_style = TextStyle::from((FONT, LABEL_SIZE).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(self.bars.iter().enumerate().map(|(rank, (_, value))| {
            let y = (n - 1 - rank) as f64;
            Text::new(format!("₹{value:.2}M"), (*value, y), value_style.clone())
        }))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::small_catalog;

    #[test]
    fn test_bars_descend_in_millions() {
        let chart = CategoryRevenueChart::new(&small_catalog());
        assert_eq!(chart.bars[0].0, Category::Bedroom);
        assert_eq!(chart.bars[0].1, (720_000.0 + 36_000.0) / 1e6);
        assert!(chart.bars.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
