//! Closed vocabularies of the catalog: top-level categories, performance tiers
//! and stock statuses.
//!
//! Each enum carries an `ALL` constant in declaration order. Generation walks
//! categories in that order, and every per-category view that is not sorted by
//! a metric reports in that order too.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Top-level storefront category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Dining,
    Bedroom,
    Living,
    Women,
    Men,
    Kids,
    Wellness,
    Accessories,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Dining,
        Category::Bedroom,
        Category::Living,
        Category::Women,
        Category::Men,
        Category::Kids,
        Category::Wellness,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dining => "Dining",
            Category::Bedroom => "Bedroom",
            Category::Living => "Living",
            Category::Women => "Women",
            Category::Men => "Men",
            Category::Kids => "Kids",
            Category::Wellness => "Wellness",
            Category::Accessories => "Accessories",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthetic sales label that drives units sold, rating and stock odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Bestseller,
    Average,
    Slow,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 3] = [
        PerformanceTier::Bestseller,
        PerformanceTier::Average,
        PerformanceTier::Slow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Bestseller => "Bestseller",
            PerformanceTier::Average => "Average",
            PerformanceTier::Slow => "Slow",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability of a product at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        for (i, status) in StockStatus::ALL.iter().enumerate() {
            assert_eq!(status.index(), i);
        }
    }

    #[test]
    fn test_stock_status_uses_display_labels() {
        assert_eq!(StockStatus::OutOfStock.to_string(), "Out of Stock");
        assert_eq!(PerformanceTier::Bestseller.to_string(), "Bestseller");
    }
}
