//! Inventory chart: overall stock-status pie next to stacked bars per
//! category.

use super::palette::{stock_color, CAPTION_SIZE, FONT, LABEL_SIZE, TITLE_SIZE};
use super::{headroom, position_label, Chart, ChartError};
use crate::analysis::stock_summary;
use crate::model::{Catalog, Category, StockStatus};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, PartialEq)]
pub struct StockAnalysisChart {
    /// Table-wide counts, indexed by [`StockStatus::index`].
    pub totals: [usize; 3],
    pub by_category: Vec<(Category, [usize; 3])>,
}

impl StockAnalysisChart {
    pub fn new(catalog: &Catalog) -> Self {
        let summary = stock_summary(catalog);
        Self {
            totals: summary.totals,
            by_category: summary
                .by_category
                .iter()
                .map(|row| (row.category, row.counts))
                .collect(),
        }
    }

    /// `(start, end)` angles of each status wedge, clockwise from twelve
    /// o'clock. Empty statuses get a zero-width wedge.
    pub fn wedges(&self) -> [(f64, f64); 3] {
        let total: usize = self.totals.iter().sum();
        let mut wedges = [(0.0, 0.0); 3];
        let mut start = 0.0;
        for (i, count) in self.totals.iter().enumerate() {
            let sweep = if total == 0 { 0.0 } else { TAU * *count as f64 / total as f64 };
            wedges[i] = (start, start + sweep);
            start += sweep;
        }
        wedges
    }

    fn draw_pie<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        let area = area.titled("Overall Stock Status", (FONT, CAPTION_SIZE))?;
        let (w, h) = area.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = (w.min(h) as f64 * 0.38).max(1.0);
        let total: usize = self.totals.iter().sum();

        let point = |angle: f64, r: f64| -> (i32, i32) {
            // Angle zero points up; positive angles run clockwise.
            let theta = angle - FRAC_PI_2;
            (
                center.0 + (r * theta.cos()).round() as i32,
                center.1 + (r * theta.sin()).round() as i32,
            )
        };

        let label_style = TextStyle::from((FONT, LABEL_SIZE).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Center));

        for (status, (start, end)) in StockStatus::ALL.iter().zip(self.wedges()) {
            if end <= start {
                continue;
            }
            let steps = ((end - start) / TAU * 180.0).ceil().max(2.0) as usize;
            let mut points = vec![center];
            points.extend((0..=steps).map(|s| point(start + (end - start) * s as f64 / steps as f64, radius)));
            area.draw(&Polygon::new(points.clone(), stock_color(*status).filled()))?;
            points.push(center);
            area.draw(&PathElement::new(points, WHITE.stroke_width(2)))?;

            let share = self.totals[status.index()] as f64 / total as f64 * 100.0;
            let middle = (start + end) / 2.0;
            area.draw(&Text::new(
                format!("{} {share:.1}%", status.as_str()),
                point(middle, radius * 0.62),
                label_style.clone(),
            ))?;
        }
        Ok(())
    }

    fn draw_stacked<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        let n = self.by_category.len();
        let names: Vec<&str> = self.by_category.iter().map(|(c, _)| c.as_str()).collect();
        let max = self
            .by_category
            .iter()
            .map(|(_, counts)| counts.iter().sum::<usize>())
            .max()
            .unwrap_or(0) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption("Stock Status by Category", (FONT, CAPTION_SIZE))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(n as f64 - 0.5).max(0.5), 0.0..headroom(max, 1.15))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.max(1))
            .x_label_formatter(&|x| position_label(&names, *x))
            .x_desc("Category")
            .y_desc("Number of Products")
            .draw()?;

        for status in StockStatus::ALL {
            let style = stock_color(status).filled();
            chart
                .draw_series(self.by_category.iter().enumerate().map(|(i, (_, counts))| {
                    let below: usize = counts[..status.index()].iter().sum();
                    let top = below + counts[status.index()];
                    let x = i as f64;
                    Rectangle::new([(x - 0.35, below as f64), (x + 0.35, top as f64)], style)
                }))?
                .label(status.as_str())
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

impl Chart for StockAnalysisChart {
    const FILE_STEM: &'static str = "chart4_stock_analysis";
    const SIZE: (u32, u32) = (1600, 700);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;
        let root = root.titled("Inventory Analysis", (FONT, TITLE_SIZE))?;
        let (width, _) = root.dim_in_pixel();
        let (left, right) = root.split_horizontally(width as i32 * 2 / 5);
        self.draw_pie(&left)?;
        self.draw_stacked(&right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::small_catalog;

    #[test]
    fn test_wedges_cover_full_circle() {
        let chart = StockAnalysisChart::new(&small_catalog());
        assert_eq!(chart.totals, [3, 1, 3]);
        let wedges = chart.wedges();
        assert_eq!(wedges[0].0, 0.0);
        assert!((wedges[2].1 - TAU).abs() < 1e-9);
        assert!((wedges[1].1 - wedges[1].0 - TAU / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog_has_no_wedges() {
        let chart = StockAnalysisChart::new(&Catalog::default());
        assert!(chart.wedges().iter().all(|(start, end)| start == end));
    }
}
