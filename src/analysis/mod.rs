//! # Catalog Analysis
//!
//! Pure aggregation views over an immutable [`Catalog`].
//!
//! Every view is a free function of the table (plus a threshold where one
//! applies). None of them mutate the table or share state, so the charts can
//! call the same functions the report uses and get the same numbers.
//!
//! | view | function |
//! |------|----------|
//! | dataset overview | [`overview`] |
//! | category performance | [`category_summary`] |
//! | top sellers per category | [`top_sellers`] |
//! | price distribution | [`price_band_summary`] |
//! | stock by category | [`stock_summary`] |
//! | out-of-stock bestsellers | [`critical_products`] |
//! | ratings by category | [`rating_summary`] |
//! | highest rated rows | [`top_rated`] |
//! | high-rated slow movers | [`opportunities`] |
//!
//! [`CatalogAnalysis::from_catalog`] computes all of them at once, plus the
//! [`ExecutiveSummary`] derived from them.
//!
//! ## Zero denominators
//!
//! Averages, shares and percentages over an empty group are `f64::NAN`. They
//! never panic and never silently become zero.

pub mod bestsellers;
pub mod category;
pub mod describe;
pub mod price_band;
pub mod rating;
pub mod stock;
pub mod summary;

pub use bestsellers::*;
pub use category::*;
pub use describe::*;
pub use price_band::*;
pub use rating::*;
pub use stock::*;
pub use summary::*;

use crate::config::AnalysisConfig;
use crate::model::{Catalog, Product};
use tracing::{debug, info};

/// `numerator / denominator`, or NaN when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Arithmetic mean; NaN for an empty sequence.
pub fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    ratio(sum, count as f64)
}

/// Every derived view of one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogAnalysis {
    pub overview: Overview,
    pub categories: Vec<CategorySummary>,
    pub top_sellers: Vec<TopSellers>,
    pub price_bands: Vec<PriceBandSummary>,
    pub stock: StockSummary,
    pub critical: Vec<CriticalProduct>,
    pub ratings: Vec<RatingSummary>,
    pub top_rated: Vec<Product>,
    pub opportunities: Vec<Product>,
    pub summary: ExecutiveSummary,
}

impl CatalogAnalysis {
    pub fn from_catalog(catalog: &Catalog, config: &AnalysisConfig) -> Self {
        debug!(?config, "Analyzing catalog");

        let overview = overview(catalog);
        let categories = category_summary(catalog);
        let top_sellers = top_sellers(catalog, config.top_sellers_per_category);
        let price_bands = price_band_summary(catalog);
        let stock = stock_summary(catalog);
        let critical = critical_products(catalog);
        let ratings = rating_summary(catalog);
        let top_rated = top_rated(catalog, config.top_rated_count);
        let opportunities = opportunities(catalog, config.opportunity_min_rating);

        let summary = ExecutiveSummary::new(
            catalog,
            &categories,
            &price_bands,
            &ratings,
            critical.len(),
            opportunities.len(),
        );

        info!(
            categories = categories.len(),
            critical = critical.len(),
            opportunities = opportunities.len(),
            "Analysis complete"
        );

        Self {
            overview,
            categories,
            top_sellers,
            price_bands,
            stock,
            critical,
            ratings,
            top_rated,
            opportunities,
            summary,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{
        round2, Catalog, Category, PerformanceTier, Product, ProductId, StockStatus,
    };
    use chrono::NaiveDate;

    /// A hand-written row; revenue follows the generator's rule.
    pub fn product(
        id: u32,
        category: Category,
        price: f64,
        units_sold: u32,
        tier: PerformanceTier,
        stock_status: StockStatus,
        rating: f64,
    ) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Item {id}"),
            category,
            sub_category: "Misc".to_string(),
            price,
            color: "Blue".to_string(),
            fabric: "Silk".to_string(),
            units_sold,
            revenue: round2(price * f64::from(units_sold)),
            stock_status,
            rating,
            num_reviews: (units_sold / 5).max(1),
            performance_tier: tier,
            date_added: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    pub fn small_catalog() -> Catalog {
        use Category::*;
        use PerformanceTier::*;
        use StockStatus::*;

        Catalog::from_products(vec![
            product(1, Dining, 2000.0, 80, Bestseller, OutOfStock, 4.6),
            product(2, Dining, 500.0, 30, Average, InStock, 4.0),
            product(3, Dining, 750.0, 30, Average, LowStock, 3.9),
            product(4, Dining, 900.0, 5, Slow, InStock, 4.7),
            product(5, Bedroom, 6000.0, 120, Bestseller, InStock, 4.9),
            product(6, Bedroom, 3000.0, 12, Average, OutOfStock, 3.6),
            product(7, Men, 1000.0, 2, Slow, OutOfStock, 4.5),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{product, small_catalog};
    use super::*;
    use crate::model::{Category, PerformanceTier, StockStatus};

    #[test]
    fn test_ratio_and_mean_handle_empty_input() {
        assert!(ratio(1.0, 0.0).is_nan());
        assert_eq!(ratio(1.0, 4.0), 0.25);
        assert!(mean(std::iter::empty()).is_nan());
        assert_eq!(mean([1.0, 2.0, 6.0].into_iter()), 3.0);
    }

    #[test]
    fn test_critical_example_reports_lost_revenue() {
        let critical = critical_products(&small_catalog());
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].product.id.0, 1);
        assert_eq!(critical[0].estimated_lost_revenue, 160_000.0);
    }

    #[test]
    fn test_category_summary_sorted_by_revenue_with_shares() {
        let catalog = small_catalog();
        let rows = category_summary(&catalog);
        let order: Vec<Category> = rows.iter().map(|r| r.category).collect();
        assert_eq!(order, vec![Category::Bedroom, Category::Dining, Category::Men]);

        let dining = &rows[1];
        assert_eq!(dining.product_count, 4);
        assert_eq!(dining.total_units, 145);
        assert_eq!(dining.total_revenue, 160_000.0 + 15_000.0 + 22_500.0 + 4_500.0);
        assert_eq!(dining.avg_price, (2000.0 + 500.0 + 750.0 + 900.0) / 4.0);

        let share_total: f64 = rows.iter().map(|r| r.revenue_share_pct).sum();
        assert!((share_total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_sellers_keep_table_order_on_ties() {
        let rows = top_sellers(&small_catalog(), 3);
        let dining = &rows[0];
        assert_eq!(dining.category, Category::Dining);
        let ids: Vec<u32> = dining.products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let men = rows.iter().find(|r| r.category == Category::Men).unwrap();
        assert_eq!(men.products.len(), 1);
    }

    #[test]
    fn test_stock_summary_counts_and_percentages() {
        let stock = stock_summary(&small_catalog());
        assert_eq!(stock.by_category.len(), 3);
        let dining = &stock.by_category[0];
        assert_eq!(dining.count(StockStatus::InStock), 2);
        assert_eq!(dining.count(StockStatus::LowStock), 1);
        assert_eq!(dining.count(StockStatus::OutOfStock), 1);
        assert_eq!(dining.out_of_stock_pct, 25.0);
        assert_eq!(stock.total(StockStatus::OutOfStock), 3);
    }

    #[test]
    fn test_rating_views() {
        let catalog = small_catalog();
        let ratings = rating_summary(&catalog);
        assert_eq!(ratings[0].category, Category::Men);
        assert_eq!(ratings[0].avg_rating, 4.5);

        let bedroom = ratings.iter().find(|r| r.category == Category::Bedroom).unwrap();
        assert_eq!(bedroom.min_rating, 3.6);
        assert_eq!(bedroom.max_rating, 4.9);

        let best: Vec<u32> = top_rated(&catalog, 2).iter().map(|p| p.id.0).collect();
        assert_eq!(best, vec![5, 4]);

        let opportunities: Vec<u32> = opportunities(&catalog, 4.5).iter().map(|p| p.id.0).collect();
        assert_eq!(opportunities, vec![4, 7]);
    }

    #[test]
    fn test_executive_summary_facts() {
        let catalog = small_catalog();
        let analysis = CatalogAnalysis::from_catalog(&catalog, &AnalysisConfig::default());
        let summary = &analysis.summary;

        assert_eq!(summary.product_count, 7);
        assert_eq!(summary.top_revenue_category, Some(Category::Bedroom));
        assert_eq!(summary.lowest_revenue_category, Some(Category::Men));
        assert_eq!(summary.premium_category, Some(Category::Bedroom));
        assert_eq!(summary.highest_revenue_band, Some(PriceBand::Luxury));
        assert_eq!(summary.critical_count, 1);
        assert_eq!(summary.opportunity_count, 2);
        assert_eq!(
            summary.avg_order_value,
            catalog.total_revenue() / catalog.total_units() as f64
        );
    }

    #[test]
    fn test_empty_catalog_yields_nan_not_panic() {
        let analysis = CatalogAnalysis::from_catalog(&Catalog::default(), &AnalysisConfig::default());
        assert!(analysis.categories.is_empty());
        assert!(analysis.summary.avg_order_value.is_nan());
        assert!(analysis.summary.overall_rating.is_nan());
        assert_eq!(analysis.summary.top_revenue_category, None);
        assert_eq!(analysis.summary.highest_volume_band, None);
        assert!(analysis.overview.price.mean.is_nan());
    }

    #[test]
    fn test_zero_revenue_share_is_nan() {
        let catalog = Catalog::from_products(vec![product(
            1,
            Category::Kids,
            0.0,
            3,
            PerformanceTier::Slow,
            StockStatus::InStock,
            4.0,
        )]);
        let rows = category_summary(&catalog);
        assert!(rows[0].revenue_share_pct.is_nan());
    }
}
