//! Inventory views: stock status by category and the critical list.

use super::ratio;
use crate::model::{Catalog, Category, Product, StockStatus};

/// Stock status counts of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct StockBreakdown {
    pub category: Category,
    /// Indexed by [`StockStatus::index`].
    pub counts: [usize; 3],
    pub total: usize,
    /// NaN when the category is empty.
    pub out_of_stock_pct: f64,
}

impl StockBreakdown {
    pub fn count(&self, status: StockStatus) -> usize {
        self.counts[status.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockSummary {
    /// One row per category present, declaration order.
    pub by_category: Vec<StockBreakdown>,
    /// Table-wide counts, indexed by [`StockStatus::index`].
    pub totals: [usize; 3],
}

impl StockSummary {
    pub fn total(&self, status: StockStatus) -> usize {
        self.totals[status.index()]
    }
}

pub fn stock_summary(catalog: &Catalog) -> StockSummary {
    let mut totals = [0usize; 3];
    let by_category = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let mut counts = [0usize; 3];
            for product in catalog.in_category(category) {
                counts[product.stock_status.index()] += 1;
                totals[product.stock_status.index()] += 1;
            }
            let total = counts.iter().sum();
            StockBreakdown {
                category,
                counts,
                total,
                out_of_stock_pct: ratio(
                    counts[StockStatus::OutOfStock.index()] as f64,
                    total as f64,
                ) * 100.0,
            }
        })
        .collect();

    StockSummary {
        by_category,
        totals,
    }
}

/// A bestseller that is out of stock, with the revenue it is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalProduct {
    pub product: Product,
    /// `price × units_sold`, per 30 days.
    pub estimated_lost_revenue: f64,
}

/// Every row that is both Out of Stock and Bestseller, in table order.
pub fn critical_products(catalog: &Catalog) -> Vec<CriticalProduct> {
    catalog
        .iter()
        .filter(|p| p.is_critical())
        .map(|p| CriticalProduct {
            product: p.clone(),
            estimated_lost_revenue: p.estimated_lost_revenue(),
        })
        .collect()
}
