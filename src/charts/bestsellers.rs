use super::palette::{CAPTION_SIZE, FONT, RANK_COLORS};
use super::{headroom, position_label, Chart, ChartError};
use crate::analysis::top_sellers;
use crate::model::{Catalog, Category};
use plotters::coord::Shift;
use plotters::prelude::*;

const BAR_WIDTH: f64 = 0.25;

/// Grouped bars: units sold by the top three products of each category.
#[derive(Debug, Clone, PartialEq)]
pub struct BestsellersChart {
    /// Units sold per rank, declaration order of categories.
    pub groups: Vec<(Category, Vec<u32>)>,
}

impl BestsellersChart {
    pub fn new(catalog: &Catalog) -> Self {
        let groups = top_sellers(catalog, RANK_COLORS.len())
            .into_iter()
            .map(|group| {
                let units = group.products.iter().map(|p| p.units_sold).collect();
                (group.category, units)
            })
            .collect();
        Self { groups }
    }
}

impl Chart for BestsellersChart {
    const FILE_STEM: &'static str = "chart3_bestsellers";
    const SIZE: (u32, u32) = (1400, 700);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;

        let n = self.groups.len();
        let names: Vec<&str> = self.groups.iter().map(|(c, _)| c.as_str()).collect();
        let max = self
            .groups
            .iter()
            .flat_map(|(_, units)| units.iter().copied())
            .max()
            .unwrap_or(0) as f64;

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Top 3 Best-Selling Products by Category (Units Sold - Last 30 Days)",
                (FONT, CAPTION_SIZE),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..(n as f64 - 0.5).max(0.5), 0.0..headroom(max, 1.15))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.max(1))
            .x_label_formatter(&|x| position_label(&names, *x))
            .x_desc("Category")
            .y_desc("Units Sold")
            .draw()?;

        for (rank, color) in RANK_COLORS.iter().enumerate() {
            let offset = (rank as f64 - 1.0) * BAR_WIDTH * 1.1;
            let style = color.filled();
            chart
                .draw_series(self.groups.iter().enumerate().filter_map(|(i, (_, units))| {
                    let value = *units.get(rank)? as f64;
                    let center = i as f64 + offset;
                    Some(Rectangle::new(
                        [(center - BAR_WIDTH / 2.0, 0.0), (center + BAR_WIDTH / 2.0, value)],
                        style,
                    ))
                }))?
                .label(format!("#{}", rank + 1))
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
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
    fn test_groups_hold_at_most_three_ranks() {
        let chart = BestsellersChart::new(&small_catalog());
        assert!(chart.groups.iter().all(|(_, units)| units.len() <= 3));
        assert_eq!(chart.groups[0], (Category::Dining, vec![80, 30, 30]));
    }
}
