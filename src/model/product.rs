//! Represents one row of the synthetic product catalog.
//!
//! Field names follow Rust conventions; the serde renames are the persisted
//! CSV headers, which downstream consumers (chart rendering included) rely on.
//! Declaration order is the column order.

use crate::model::{Category, PerformanceTier, StockStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;

/// Prefix of every persisted product code.
pub const PRODUCT_ID_PREFIX: &str = "TSI";

/// Type-safe identifier for Products, persisted as `TSI0001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", PRODUCT_ID_PREFIX, self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(PRODUCT_ID_PREFIX)
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(ProductId)
            .ok_or_else(|| format!("Invalid product id: {s}"))
    }
}

impl TryFrom<String> for ProductId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Product_ID")]
    pub id: ProductId,
    #[serde(rename = "Product_Name")]
    pub name: String,
    #[serde(rename = "Main_Category")]
    pub category: Category,
    #[serde(rename = "Sub_Category")]
    pub sub_category: String,
    #[serde(rename = "Price_INR")]
    pub price: f64,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Fabric")]
    pub fabric: String,
    #[serde(rename = "Units_Sold_30_Days")]
    pub units_sold: u32,
    #[serde(rename = "Revenue_30_Days")]
    pub revenue: f64,
    #[serde(rename = "Stock_Status")]
    pub stock_status: StockStatus,
    #[serde(rename = "Customer_Rating")]
    pub rating: f64,
    #[serde(rename = "Num_Reviews")]
    pub num_reviews: u32,
    #[serde(rename = "Performance_Tier")]
    pub performance_tier: PerformanceTier,
    #[serde(rename = "Date_Added")]
    pub date_added: NaiveDate,
}

impl Product {
    /// True for a bestseller that cannot currently be bought.
    pub fn is_critical(&self) -> bool {
        self.stock_status == StockStatus::OutOfStock
            && self.performance_tier == PerformanceTier::Bestseller
    }

    /// Revenue the row would bring in at its current sales rate.
    pub fn estimated_lost_revenue(&self) -> f64 {
        self.price * f64::from(self.units_sold)
    }
}

/// Rounds to two decimal places, the precision of every persisted money and
/// rating value.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Column headers of the persisted table, in order.
pub const CSV_HEADERS: [&str; 14] = [
    "Product_ID",
    "Product_Name",
    "Main_Category",
    "Sub_Category",
    "Price_INR",
    "Color",
    "Fabric",
    "Units_Sold_30_Days",
    "Revenue_30_Days",
    "Stock_Status",
    "Customer_Rating",
    "Num_Reviews",
    "Performance_Tier",
    "Date_Added",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display_and_parse() {
        let id = ProductId(7);
        assert_eq!(id.to_string(), "TSI0007");
        assert_eq!("TSI0007".parse::<ProductId>().unwrap(), id);
        assert_eq!("TSI1520".parse::<ProductId>().unwrap(), ProductId(1520));
        assert!("product_7".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1234.5678), 1234.57);
        assert_eq!(round2(4.2049), 4.2);
    }
}
