//! Customer satisfaction views.

use super::mean;
use crate::model::{Catalog, Category, PerformanceTier, Product};

#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub category: Category,
    pub avg_rating: f64,
    pub min_rating: f64,
    pub max_rating: f64,
    pub total_reviews: u64,
}

/// Per-category rating statistics, best average first (stable).
pub fn rating_summary(catalog: &Catalog) -> Vec<RatingSummary> {
    let mut rows: Vec<RatingSummary> = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let ratings: Vec<f64> = catalog.in_category(category).map(|p| p.rating).collect();
            RatingSummary {
                category,
                avg_rating: mean(ratings.iter().copied()),
                min_rating: ratings.iter().copied().fold(f64::INFINITY, f64::min),
                max_rating: ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                total_reviews: catalog
                    .in_category(category)
                    .map(|p| u64::from(p.num_reviews))
                    .sum(),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    rows
}

/// The `n` highest-rated rows across the table; ties keep table order.
pub fn top_rated(catalog: &Catalog, n: usize) -> Vec<Product> {
    let mut products: Vec<&Product> = catalog.iter().collect();
    products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    products.into_iter().take(n).cloned().collect()
}

/// Slow movers rated at or above `min_rating`: well liked, under-marketed.
pub fn opportunities(catalog: &Catalog, min_rating: f64) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| p.rating >= min_rating && p.performance_tier == PerformanceTier::Slow)
        .cloned()
        .collect()
}
