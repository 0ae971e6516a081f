//! Price bands and the per-band distribution of volume and revenue.

use super::ratio;
use crate::model::Catalog;
use std::fmt::Display;

/// Five fixed, half-open price intervals; the last one is open-ended.
///
/// | band      | range          |
/// |-----------|----------------|
/// | Budget    | [0, 1000)      |
/// | Economy   | [1000, 2000)   |
/// | MidRange  | [2000, 3000)   |
/// | Premium   | [3000, 5000)   |
/// | Luxury    | [5000, ∞)      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Budget,
    Economy,
    MidRange,
    Premium,
    Luxury,
}

impl PriceBand {
    pub const ALL: [PriceBand; 5] = [
        PriceBand::Budget,
        PriceBand::Economy,
        PriceBand::MidRange,
        PriceBand::Premium,
        PriceBand::Luxury,
    ];

    /// Lower bounds of each band; a band ends where the next one starts.
    const LOWER_BOUNDS: [f64; 5] = [0.0, 1000.0, 2000.0, 3000.0, 5000.0];

    /// The single band a price falls into. Prices below zero land in Budget.
    pub fn for_price(price: f64) -> PriceBand {
        Self::ALL
            .into_iter()
            .rev()
            .find(|band| price >= band.lower_bound())
            .unwrap_or(PriceBand::Budget)
    }

    pub fn lower_bound(&self) -> f64 {
        Self::LOWER_BOUNDS[*self as usize]
    }

    /// Exclusive upper bound; `None` for the open-ended top band.
    pub fn upper_bound(&self) -> Option<f64> {
        Self::LOWER_BOUNDS.get(*self as usize + 1).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Budget => "Budget (<₹1K)",
            PriceBand::Economy => "Economy (₹1-2K)",
            PriceBand::MidRange => "Mid-Range (₹2-3K)",
            PriceBand::Premium => "Premium (₹3-5K)",
            PriceBand::Luxury => "Luxury (>₹5K)",
        }
    }
}

impl Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBandSummary {
    pub band: PriceBand,
    pub product_count: usize,
    pub units_sold: u64,
    pub revenue: f64,
    /// NaN for an empty band.
    pub revenue_per_product: f64,
}

/// All five bands in ascending order, empty bands included.
pub fn price_band_summary(catalog: &Catalog) -> Vec<PriceBandSummary> {
    let mut rows: Vec<PriceBandSummary> = PriceBand::ALL
        .into_iter()
        .map(|band| PriceBandSummary {
            band,
            product_count: 0,
            units_sold: 0,
            revenue: 0.0,
            revenue_per_product: f64::NAN,
        })
        .collect();

    for product in catalog {
        let row = &mut rows[PriceBand::for_price(product.price) as usize];
        row.product_count += 1;
        row.units_sold += u64::from(product.units_sold);
        row.revenue += product.revenue;
    }

    for row in &mut rows {
        row.revenue_per_product = ratio(row.revenue, row.product_count as f64);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_lower_inclusive() {
        assert_eq!(PriceBand::for_price(0.0), PriceBand::Budget);
        assert_eq!(PriceBand::for_price(999.99), PriceBand::Budget);
        assert_eq!(PriceBand::for_price(1000.0), PriceBand::Economy);
        assert_eq!(PriceBand::for_price(2999.99), PriceBand::MidRange);
        assert_eq!(PriceBand::for_price(3000.0), PriceBand::Premium);
        assert_eq!(PriceBand::for_price(4999.99), PriceBand::Premium);
        assert_eq!(PriceBand::for_price(5000.0), PriceBand::Luxury);
        assert_eq!(PriceBand::for_price(19_000.0), PriceBand::Luxury);
    }

    #[test]
    fn test_bounds_chain_without_gaps() {
        for pair in PriceBand::ALL.windows(2) {
            assert_eq!(pair[0].upper_bound(), Some(pair[1].lower_bound()));
        }
        assert_eq!(PriceBand::Luxury.upper_bound(), None);
    }

    #[test]
    fn test_empty_catalog_reports_every_band_with_nan_average() {
        let rows = price_band_summary(&Catalog::default());
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.product_count == 0));
        assert!(rows.iter().all(|r| r.revenue_per_product.is_nan()));
    }
}
