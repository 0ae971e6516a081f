//! Category performance: revenue, volume, price and rating per category.

use super::{mean, ratio};
use crate::model::{Catalog, Category};

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub product_count: usize,
    pub total_revenue: f64,
    pub total_units: u64,
    pub avg_price: f64,
    pub avg_rating: f64,
    /// Share of the table's total revenue, in percent; NaN when total revenue is zero.
    pub revenue_share_pct: f64,
}

/// One entry per category present in the table, sorted by total revenue
/// (highest first). Equal revenues keep declaration order.
pub fn category_summary(catalog: &Catalog) -> Vec<CategorySummary> {
    let total_revenue = catalog.total_revenue();

    let mut rows: Vec<CategorySummary> = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let products: Vec<_> = catalog.in_category(category).collect();
            let revenue: f64 = products.iter().map(|p| p.revenue).sum();
            CategorySummary {
                category,
                product_count: products.len(),
                total_revenue: revenue,
                total_units: products.iter().map(|p| u64::from(p.units_sold)).sum(),
                avg_price: mean(products.iter().map(|p| p.price)),
                avg_rating: mean(products.iter().map(|p| p.rating)),
                revenue_share_pct: ratio(revenue, total_revenue) * 100.0,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows
}
