//! Price distribution: a 50-bin histogram with mean and median markers, next
//! to a per-category box plot.
//!
//! Whiskers reach the furthest price within 1.5 IQR of the box; anything
//! beyond is drawn as an outlier point.

use super::palette::{category_color, CAPTION_SIZE, FONT, TITLE_SIZE};
use super::{headroom, position_label, Chart, ChartError};
use crate::analysis::{quantile_sorted, Describe};
use crate::model::{Catalog, Category};
use plotters::coord::Shift;
use plotters::prelude::*;

pub const HISTOGRAM_BINS: usize = 50;

/// One histogram bar: `[lower, upper)` and the rows inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width bins over `[min, max]`; the maximum lands in the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };

    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();
    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        out[index].count += 1;
    }
    out
}

/// Box-plot geometry of one category's prices.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub category: Category,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_prices(category: Category, prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let mut sorted = prices.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25);
        let q3 = quantile_sorted(&sorted, 0.75);
        let reach = 1.5 * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = sorted.iter().copied().filter(|p| (low_fence..=high_fence).contains(p));
        let lower_whisker = inside.clone().fold(f64::INFINITY, f64::min);
        let upper_whisker = inside.fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            category,
            q1,
            median: quantile_sorted(&sorted, 0.5),
            q3,
            lower_whisker,
            upper_whisker,
            outliers: sorted
                .iter()
                .copied()
                .filter(|p| !(low_fence..=high_fence).contains(p))
                .collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceAnalysisChart {
    pub bins: Vec<Bin>,
    pub mean: f64,
    pub median: f64,
    /// Declaration order of the categories present.
    pub boxes: Vec<BoxStats>,
}

impl PriceAnalysisChart {
    pub fn new(catalog: &Catalog) -> Self {
        let prices: Vec<f64> = catalog.iter().map(|p| p.price).collect();
        let stats = Describe::from_values(&prices);
        let boxes = catalog
            .categories()
            .into_iter()
            .filter_map(|category| {
                let prices: Vec<f64> = catalog.in_category(category).map(|p| p.price).collect();
                BoxStats::from_prices(category, &prices)
            })
            .collect();

        Self {
            bins: histogram(&prices, HISTOGRAM_BINS),
            mean: stats.mean,
            median: stats.median,
            boxes,
        }
    }

    fn draw_histogram<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), ChartError> {
        let x_min = self.bins.first().map_or(0.0, |b| b.lower);
        let x_max = self.bins.last().map_or(1.0, |b| b.upper);
        let y_max = self.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;

        let mut chart = ChartBuilder::on(area)
            .caption("Price Distribution", (FONT, CAPTION_SIZE))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0.0..headroom(y_max, 1.1))?;

        chart
            .configure_mesh()
            .x_desc("Price (₹)")
            .y_desc("Number of Products")
            .x_label_formatter(&|x| format!("{x:.0}"))
            .draw()?;

        let bar = RGBColor(52, 152, 219);
        chart.draw_series(self.bins.iter().map(|bin| {
            Rectangle::new([(bin.lower, 0.0), (bin.upper, bin.count as f64)], bar.filled())
        }))?;
        chart.draw_series(
            self.bins
                .iter()
                .map(|bin| Rectangle::new([(bin.lower, 0.0), (bin.upper, bin.count as f64)], BLACK.stroke_width(1))),
        )?;

        let top = headroom(y_max, 1.1);
        for (value, label, color) in [
            (self.median, format!("Median: ₹{:.0}", self.median), RED),
            (self.mean, format!("Mean: ₹{:.0}", self.mean), GREEN),
        ] {
            if value.is_nan() {
                continue;
            }
            let style = color.stroke_width(2);
            chart
                .draw_series(LineSeries::new([(value, 0.0), (value, top)], style))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
        Ok(())
    }

    fn draw_boxes<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        let n = self.boxes.len();
        let names: Vec<&str> = self.boxes.iter().map(|b| b.category.as_str()).collect();
        let y_max = self
            .boxes
            .iter()
            .flat_map(|b| b.outliers.iter().copied().chain([b.upper_whisker]))
            .fold(0.0, f64::max);

        let mut chart = ChartBuilder::on(area)
            .caption("Price Range by Category", (FONT, CAPTION_SIZE))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..(n as f64 - 0.5).max(0.5), 0.0..headroom(y_max, 1.05))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.max(1))
            .x_label_formatter(&|x| position_label(&names, *x))
            .y_desc("Price (₹)")
            .draw()?;

        for (i, stats) in self.boxes.iter().enumerate() {
            let x = i as f64;
            let color = category_color(stats.category);
            let (left, right) = (x - 0.3, x + 0.3);

            chart.draw_series([
                Rectangle::new([(left, stats.q1), (right, stats.q3)], color.mix(0.8).filled()),
                Rectangle::new([(left, stats.q1), (right, stats.q3)], BLACK.stroke_width(1)),
            ])?;
            chart.draw_series(
                [
                    vec![(left, stats.median), (right, stats.median)],
                    vec![(x, stats.q3), (x, stats.upper_whisker)],
                    vec![(x, stats.q1), (x, stats.lower_whisker)],
                    vec![(x - 0.15, stats.upper_whisker), (x + 0.15, stats.upper_whisker)],
                    vec![(x - 0.15, stats.lower_whisker), (x + 0.15, stats.lower_whisker)],
                ]
                .into_iter()
                .map(|points| PathElement::new(points, BLACK.stroke_width(1))),
            )?;
            chart.draw_series(
                stats
                    .outliers
                    .iter()
                    .map(|price| Circle::new((x, *price), 3, BLACK.stroke_width(1))),
            )?;
        }
        Ok(())
    }
}

impl Chart for PriceAnalysisChart {
    const FILE_STEM: &'static str = "chart2_price_analysis";
    const SIZE: (u32, u32) = (1600, 650);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), ChartError> {
        root.fill(&WHITE)?;
        let root = root.titled("Price Analysis", (FONT, TITLE_SIZE))?;
        let (width, _) = root.dim_in_pixel();
        let (left, right) = root.split_horizontally(width as i32 / 2);
        self.draw_histogram(&left)?;
        self.draw_boxes(&right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_every_value_once() {
        let values = [100.0, 150.0, 199.0, 200.0, 1000.0];
        let bins = histogram(&values, 50);
        assert_eq!(bins.len(), 50);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].lower, 100.0);
        assert_eq!(bins[49].count, 1);
    }

    #[test]
    fn test_histogram_of_constant_values() {
        let bins = histogram(&[5.0, 5.0], 4);
        assert_eq!(bins[0].count, 2);
        assert!(histogram(&[], 50).is_empty());
    }

    #[test]
    fn test_box_stats_split_outliers() {
        let prices = [10.0, 11.0, 12.0, 13.0, 14.0, 100.0];
        let stats = BoxStats::from_prices(Category::Kids, &prices).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.upper_whisker, 14.0);
        assert_eq!(stats.lower_whisker, 10.0);
        assert!(BoxStats::from_prices(Category::Kids, &[]).is_none());
    }
}
