//! Headline metrics and the facts the recommendations are built from.

use super::{mean, ratio, CategorySummary, PriceBand, PriceBandSummary, RatingSummary};
use crate::model::{Catalog, Category};

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutiveSummary {
    pub product_count: usize,
    pub total_revenue: f64,
    pub total_units: u64,
    /// Revenue per unit sold; NaN when nothing sold.
    pub avg_order_value: f64,
    pub overall_rating: f64,
    pub top_revenue_category: Option<Category>,
    pub lowest_revenue_category: Option<Category>,
    pub highest_rated_category: Option<Category>,
    /// Category with the highest average price.
    pub premium_category: Option<Category>,
    pub most_reviewed_category: Option<Category>,
    pub highest_volume_band: Option<PriceBand>,
    pub highest_revenue_band: Option<PriceBand>,
    pub critical_count: usize,
    pub opportunity_count: usize,
}

impl ExecutiveSummary {
    /// Derives the summary from views that were already computed from `catalog`.
    ///
    /// `categories` must be sorted by revenue (as [`super::category_summary`]
    /// returns it). Ties on a maximum resolve to the first entry.
    pub fn new(
        catalog: &Catalog,
        categories: &[CategorySummary],
        price_bands: &[PriceBandSummary],
        ratings: &[RatingSummary],
        critical_count: usize,
        opportunity_count: usize,
    ) -> Self {
        let total_revenue = catalog.total_revenue();
        let total_units = catalog.total_units();

        Self {
            product_count: catalog.len(),
            total_revenue,
            total_units,
            avg_order_value: ratio(total_revenue, total_units as f64),
            overall_rating: mean(catalog.iter().map(|p| p.rating)),
            top_revenue_category: categories.first().map(|c| c.category),
            lowest_revenue_category: categories.last().map(|c| c.category),
            highest_rated_category: first_max(categories, |c| c.avg_rating).map(|c| c.category),
            premium_category: first_max(categories, |c| c.avg_price).map(|c| c.category),
            most_reviewed_category: first_max(ratings, |r| r.total_reviews as f64)
                .map(|r| r.category),
            highest_volume_band: first_max(nonempty(price_bands).as_slice(), |b| b.units_sold as f64)
                .map(|b| b.band),
            highest_revenue_band: first_max(nonempty(price_bands).as_slice(), |b| b.revenue)
                .map(|b| b.band),
            critical_count,
            opportunity_count,
        }
    }
}

fn nonempty(bands: &[PriceBandSummary]) -> Vec<PriceBandSummary> {
    bands
        .iter()
        .filter(|b| b.product_count > 0)
        .cloned()
        .collect()
}

/// First element holding the maximum key.
fn first_max<T: Clone>(items: &[T], key: impl Fn(&T) -> f64) -> Option<T> {
    let mut best: Option<&T> = None;
    for item in items {
        match best {
            Some(current) if key(item) <= key(current) => {}
            _ => best = Some(item),
        }
    }
    best.cloned()
}
