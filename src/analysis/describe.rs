//! Descriptive statistics and the dataset overview.

use crate::model::Catalog;
use chrono::NaiveDate;

/// Summary statistics of one numeric column.
///
/// Quantiles use linear interpolation between closest ranks and `std` is the
/// sample standard deviation. Every statistic of an empty column is NaN; `std`
/// is NaN for a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        };

        Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }
}

/// Linear-interpolated quantile of an ascending slice; NaN when empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Section-one view: shape of the table and its two headline columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub product_count: usize,
    pub category_count: usize,
    pub first_added: Option<NaiveDate>,
    pub last_added: Option<NaiveDate>,
    pub price: Describe,
    pub units_sold: Describe,
}

pub fn overview(catalog: &Catalog) -> Overview {
    let prices: Vec<f64> = catalog.iter().map(|p| p.price).collect();
    let units: Vec<f64> = catalog.iter().map(|p| f64::from(p.units_sold)).collect();

    Overview {
        product_count: catalog.len(),
        category_count: catalog.categories().len(),
        first_added: catalog.iter().map(|p| p.date_added).min(),
        last_added: catalog.iter().map(|p| p.date_added).max(),
        price: Describe::from_values(&prices),
        units_sold: Describe::from_values(&units),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_values() {
        let stats = Describe::from_values(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.q25, 1.75);
        assert_eq!(stats.q75, 3.25);
        assert!((stats.std - 1.290_994_448_735_805_6).abs() < 1e-12);
    }

    #[test]
    fn test_describe_empty_is_nan() {
        let stats = Describe::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.median.is_nan());
    }

    #[test]
    fn test_single_value_has_no_spread() {
        let stats = Describe::from_values(&[7.0]);
        assert_eq!(stats.median, 7.0);
        assert!(stats.std.is_nan());
    }
}
