//! # Generator Tables
//!
//! Every constant the catalog generator draws from: row counts, sub-category
//! lists and price ranges per category, tier odds and ranges, vocabularies and
//! the premium, review and date rules.
//!
//! The reference values come from an exhaustive `match` over [`Category`] and
//! [`PerformanceTier`], so adding a variant without a profile does not compile.
//! Tables loaded from TOML are checked by [`GeneratorConfig::validate`] before
//! any row is drawn.

use super::ConfigError;
use chrono::{Days, NaiveDate};
use crate::model::{Category, PerformanceTier, StockStatus};
use serde::{Deserialize, Serialize};

/// Tolerance used when checking that probabilities sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A half-open range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl Interval<f64> {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    fn check(&self, field: impl Into<String>) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidInterval {
                field: field.into(),
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Interval<u32> {
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value < self.max
    }

    fn check(&self, field: impl Into<String>) -> Result<(), ConfigError> {
        if self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidInterval {
                field: field.into(),
                min: f64::from(self.min),
                max: f64::from(self.max),
            })
        }
    }
}

/// How many rows a category gets and what they are drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub category: Category,
    pub count: u32,
    pub sub_categories: Vec<String>,
    pub price: Interval<f64>,
}

impl CategoryProfile {
    /// The reference profile for a category.
    pub fn reference(category: Category) -> Self {
        let (count, sub_categories, price): (u32, &[&str], Interval<f64>) = match category {
            Category::Dining => (
                180,
                &["Table Cloths", "Table Runners", "Mats & Napkins", "Kitchen Linen"],
                Interval::new(500.0, 3500.0),
            ),
            Category::Bedroom => (
                220,
                &[
                    "Throws & Coverlets",
                    "Quilts & Duvet Covers",
                    "Sheets & Bedcovers",
                    "Pillows",
                ],
                Interval::new(1500.0, 8000.0),
            ),
            Category::Living => (
                250,
                &[
                    "Cushions",
                    "Curtains",
                    "Rugs",
                    "Floor Cushions",
                    "Decor",
                    "Lights & Shades",
                ],
                Interval::new(800.0, 6000.0),
            ),
            Category::Women => (
                280,
                &[
                    "Dresses",
                    "Jackets & Shrugs",
                    "Kimonos & Kaftans",
                    "Tunics & Kurtas",
                    "Sarees",
                ],
                Interval::new(1200.0, 4500.0),
            ),
            Category::Men => (
                140,
                &["Kurtas", "Pants & Pyjamas", "Shirts & Tunics", "Loungewear"],
                Interval::new(1200.0, 4500.0),
            ),
            Category::Kids => (
                180,
                &["Dresses", "Tunics & Kurtas", "PJ Sets", "Tops & Shirts"],
                Interval::new(800.0, 2500.0),
            ),
            Category::Wellness => (
                120,
                &["Towels & Robes", "Bath & Body", "Aromatherapy"],
                Interval::new(500.0, 3500.0),
            ),
            Category::Accessories => (
                150,
                &[
                    "Scarves & Wraps",
                    "Dupattas & Sarongs",
                    "Bags",
                    "Hair Accessories",
                ],
                Interval::new(500.0, 3500.0),
            ),
        };

        Self {
            category,
            count,
            sub_categories: sub_categories.iter().map(|s| s.to_string()).collect(),
            price,
        }
    }
}

/// Odds of each stock status, in [`StockStatus::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockWeights {
    pub in_stock: f64,
    pub low_stock: f64,
    pub out_of_stock: f64,
}

impl StockWeights {
    pub fn as_array(&self) -> [f64; 3] {
        [self.in_stock, self.low_stock, self.out_of_stock]
    }

    pub fn weight(&self, status: StockStatus) -> f64 {
        self.as_array()[status.index()]
    }
}

/// Draw rules for one performance tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub tier: PerformanceTier,
    pub probability: f64,
    pub units_sold: Interval<u32>,
    pub rating: Interval<f64>,
    pub stock: StockWeights,
}

impl TierProfile {
    pub fn reference(tier: PerformanceTier) -> Self {
        match tier {
            PerformanceTier::Bestseller => Self {
                tier,
                probability: 0.15,
                units_sold: Interval::new(50, 200),
                rating: Interval::new(4.2, 5.0),
                stock: StockWeights {
                    in_stock: 0.7,
                    low_stock: 0.2,
                    out_of_stock: 0.1,
                },
            },
            PerformanceTier::Average => Self {
                tier,
                probability: 0.60,
                units_sold: Interval::new(10, 50),
                rating: Interval::new(3.5, 4.8),
                stock: StockWeights {
                    in_stock: 0.6,
                    low_stock: 0.2,
                    out_of_stock: 0.2,
                },
            },
            PerformanceTier::Slow => Self {
                tier,
                probability: 0.25,
                units_sold: Interval::new(1, 10),
                rating: Interval::new(3.5, 4.8),
                stock: StockWeights {
                    in_stock: 0.6,
                    low_stock: 0.2,
                    out_of_stock: 0.2,
                },
            },
        }
    }
}

/// Full table set for the catalog generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed of the explicit random source.
    pub seed: u64,
    /// One profile per category; order of this list does not matter, rows are
    /// always laid out in category declaration order.
    pub categories: Vec<CategoryProfile>,
    pub tiers: Vec<TierProfile>,
    pub colors: Vec<String>,
    pub fabrics: Vec<String>,
    /// Chance that a row's base price is escalated.
    pub premium_probability: f64,
    pub premium_multiplier: Interval<f64>,
    /// Fraction of units sold that left a review.
    pub review_ratio: Interval<f64>,
    /// Rows are dated 1..=date_window_days days before generation.
    pub date_window_days: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            categories: Category::ALL.into_iter().map(CategoryProfile::reference).collect(),
            tiers: PerformanceTier::ALL.into_iter().map(TierProfile::reference).collect(),
            colors: [
                "Blue", "Black", "White", "Beige", "Green", "Red", "Yellow", "Pink", "Cream",
                "Navy", "Emerald", "Indigo", "Multi", "Natural", "Aqua",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            fabrics: [
                "Cotton Voile",
                "100% Cotton",
                "Cotton Textured",
                "Cotton Sheeting",
                "Cotton Cambric",
                "Chanderi Silk",
                "Wool",
                "Cotton Canvas",
                "Silk",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            premium_probability: 0.10,
            premium_multiplier: Interval::new(1.5, 2.5),
            review_ratio: Interval::new(0.1, 0.3),
            date_window_days: 730,
        }
    }
}

impl GeneratorConfig {
    pub fn category(&self, category: Category) -> Option<&CategoryProfile> {
        self.categories.iter().find(|p| p.category == category)
    }

    pub fn tier(&self, tier: PerformanceTier) -> Option<&TierProfile> {
        self.tiers.iter().find(|p| p.tier == tier)
    }

    /// Total rows a run produces.
    pub fn total_count(&self) -> u64 {
        self.categories.iter().map(|p| u64::from(p.count)).sum()
    }

    /// Checks that every category and tier is configured exactly once and
    /// that every range and distribution can be sampled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = [false; Category::ALL.len()];
        for profile in &self.categories {
            let slot = &mut seen[profile.category.index()];
            if *slot {
                return Err(ConfigError::DuplicateCategory(profile.category));
            }
            *slot = true;

            if profile.sub_categories.is_empty() {
                return Err(ConfigError::EmptySubCategories(profile.category));
            }
            profile.price.check(format!("{} price", profile.category))?;
            if profile.price.min < 0.0 {
                return Err(ConfigError::InvalidInterval {
                    field: format!("{} price", profile.category),
                    min: profile.price.min,
                    max: profile.price.max,
                });
            }
        }
        if let Some(missing) = Category::ALL.into_iter().find(|c| !seen[c.index()]) {
            return Err(ConfigError::MissingCategory(missing));
        }

        let mut seen = [false; PerformanceTier::ALL.len()];
        for profile in &self.tiers {
            let slot = &mut seen[profile.tier.index()];
            if *slot {
                return Err(ConfigError::DuplicateTier(profile.tier));
            }
            *slot = true;

            check_probability(format!("{} probability", profile.tier), profile.probability)?;
            profile.units_sold.check(format!("{} units_sold", profile.tier))?;
            profile.rating.check(format!("{} rating", profile.tier))?;
            check_weights(format!("{} stock", profile.tier), &profile.stock.as_array())?;
        }
        if let Some(missing) = PerformanceTier::ALL.into_iter().find(|t| !seen[t.index()]) {
            return Err(ConfigError::MissingTier(missing));
        }
        let tier_odds: Vec<f64> = self.tiers.iter().map(|t| t.probability).collect();
        check_weights("performance tiers".to_string(), &tier_odds)?;

        if self.colors.is_empty() {
            return Err(ConfigError::EmptyVocabulary("colors"));
        }
        if self.fabrics.is_empty() {
            return Err(ConfigError::EmptyVocabulary("fabrics"));
        }

        check_probability("premium_probability".to_string(), self.premium_probability)?;
        self.premium_multiplier.check("premium_multiplier")?;
        self.review_ratio.check("review_ratio")?;
        if self.review_ratio.min < 0.0 {
            return Err(ConfigError::InvalidInterval {
                field: "review_ratio".to_string(),
                min: self.review_ratio.min,
                max: self.review_ratio.max,
            });
        }
        if self.date_window_days == 0 {
            return Err(ConfigError::ZeroDateWindow);
        }

        Ok(())
    }

    /// Earliest `date_added` a row can get when generating on `today`.
    pub fn earliest_date(&self, today: NaiveDate) -> Result<NaiveDate, ConfigError> {
        today
            .checked_sub_days(Days::new(u64::from(self.date_window_days)))
            .ok_or(ConfigError::DateWindowTooLarge {
                days: self.date_window_days,
                today,
            })
    }
}

fn check_probability(field: String, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { field, value })
    }
}

fn check_weights(field: String, weights: &[f64]) -> Result<(), ConfigError> {
    for &w in weights {
        check_probability(field.clone(), w)?;
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::WeightsDoNotSumToOne { field, sum });
    }
    Ok(())
}
