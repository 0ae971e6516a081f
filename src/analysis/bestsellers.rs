//! Best-selling rows per category.

use crate::model::{Catalog, Category, Product};

#[derive(Debug, Clone, PartialEq)]
pub struct TopSellers {
    pub category: Category,
    /// At most `n` rows, highest `units_sold` first.
    pub products: Vec<Product>,
}

/// The `n` rows with the most units sold in each category, categories in
/// declaration order. Sorting is stable, so ties keep table order.
pub fn top_sellers(catalog: &Catalog, n: usize) -> Vec<TopSellers> {
    catalog
        .categories()
        .into_iter()
        .map(|category| {
            let mut products: Vec<&Product> = catalog.in_category(category).collect();
            products.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
            TopSellers {
                category,
                products: products.into_iter().take(n).cloned().collect(),
            }
        })
        .collect()
}
