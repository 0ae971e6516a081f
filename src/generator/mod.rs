//! # Catalog Generator
//!
//! Draws the synthetic product table from a validated [`GeneratorConfig`].
//!
//! ## Randomness
//!
//! The random source is owned by the generator and passed in by the caller.
//! [`generate`] seeds a [`StdRng`] from the configured seed, so the same
//! seed, tables and generation date always produce the same catalog. Tests can
//! hand in their own `Rng` through [`CatalogGenerator::new`].
//!
//! ## Layout
//!
//! Rows are produced category by category in [`Category::ALL`] order, each
//! category's rows in draw order, with ids assigned sequentially from
//! `TSI0001`. Categories are never interleaved.
//!
//! ## Per-row draw order
//!
//! 1. sub-category
//! 2. base price, then the premium escalation check (and its factor)
//! 3. performance tier
//! 4. units sold, stock status, rating, review ratio (all tier-conditioned)
//! 5. name color, color, fabric
//! 6. date offset
//!
//! The order is part of the reproducibility contract: changing it changes
//! every row after the first.

use crate::config::{CategoryProfile, ConfigError, GeneratorConfig, TierProfile};
use crate::model::{round2, Catalog, Category, PerformanceTier, Product, ProductId, StockStatus};
use chrono::{Days, NaiveDate};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, debug_span, info};

/// Generates the catalog with a [`StdRng`] seeded from `seed`.
pub fn generate(
    config: &GeneratorConfig,
    seed: u64,
    today: NaiveDate,
) -> Result<Catalog, ConfigError> {
    let rng = StdRng::seed_from_u64(seed);
    CatalogGenerator::new(config, rng, today)?.generate()
}

/// Tier profile paired with its stock-status sampler.
struct TierSampler<'a> {
    tier: PerformanceTier,
    profile: &'a TierProfile,
    stock: WeightedIndex<f64>,
}

/// Stateful generator over an explicit random source.
pub struct CatalogGenerator<'a, R: Rng> {
    config: &'a GeneratorConfig,
    rng: R,
    today: NaiveDate,
    tier_index: WeightedIndex<f64>,
    tiers: Vec<TierSampler<'a>>,
}

impl<'a, R: Rng> CatalogGenerator<'a, R> {
    /// Validates the tables and prepares the categorical samplers.
    ///
    /// `today` is the generation date that `date_added` offsets count back from.
    pub fn new(config: &'a GeneratorConfig, rng: R, today: NaiveDate) -> Result<Self, ConfigError> {
        config.validate()?;
        config.earliest_date(today)?;

        let mut tiers = Vec::with_capacity(PerformanceTier::ALL.len());
        for tier in PerformanceTier::ALL {
            let profile = config.tier(tier).ok_or(ConfigError::MissingTier(tier))?;
            let stock = WeightedIndex::new(profile.stock.as_array()).map_err(|e| {
                ConfigError::InvalidWeights {
                    field: format!("{tier} stock"),
                    reason: e.to_string(),
                }
            })?;
            tiers.push(TierSampler {
                tier,
                profile,
                stock,
            });
        }

        let tier_index = WeightedIndex::new(tiers.iter().map(|t| t.profile.probability))
            .map_err(|e| ConfigError::InvalidWeights {
                field: "performance tiers".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            config,
            rng,
            today,
            tier_index,
            tiers,
        })
    }

    /// Draws every row and returns the finished table.
    pub fn generate(mut self) -> Result<Catalog, ConfigError> {
        let config = self.config;
        let mut products = Vec::with_capacity(config.total_count() as usize);
        let mut next_id: u32 = 1;

        for category in Category::ALL {
            let profile = config
                .category(category)
                .ok_or(ConfigError::MissingCategory(category))?;

            let span = debug_span!("category", %category);
            let _entered = span.enter();

            for _ in 0..profile.count {
                let product = self.draw_product(ProductId(next_id), profile)?;
                products.push(product);
                next_id += 1;
            }
            debug!(count = profile.count, "Category generated");
        }

        info!(rows = products.len(), today = %self.today, "Catalog generated");
        Ok(Catalog::from_products(products))
    }

    fn draw_product(
        &mut self,
        id: ProductId,
        profile: &CategoryProfile,
    ) -> Result<Product, ConfigError> {
        let config = self.config;

        let sub_category = profile
            .sub_categories
            .choose(&mut self.rng)
            .ok_or(ConfigError::EmptySubCategories(profile.category))?
            .clone();

        let mut price = self.rng.random_range(profile.price.min..profile.price.max);
        if self.rng.random_bool(config.premium_probability) {
            let multiplier = config.premium_multiplier;
            price *= self.rng.random_range(multiplier.min..multiplier.max);
        }

        let tier = &self.tiers[self.tier_index.sample(&mut self.rng)];
        let performance_tier = tier.tier;
        let units = tier.profile.units_sold;
        let units_sold = self.rng.random_range(units.min..units.max);
        let stock_status = StockStatus::ALL[tier.stock.sample(&mut self.rng)];
        let rating = round2(
            self.rng
                .random_range(tier.profile.rating.min..tier.profile.rating.max),
        );
        let review_ratio = self
            .rng
            .random_range(config.review_ratio.min..config.review_ratio.max);
        let num_reviews = ((f64::from(units_sold) * review_ratio).floor() as u32).max(1);

        // Revenue is computed from the persisted (rounded) price.
        let price = round2(price);
        let revenue = round2(price * f64::from(units_sold));

        let name_color = self.pick(&config.colors, "colors")?;
        let color = self.pick(&config.colors, "colors")?;
        let fabric = self.pick(&config.fabrics, "fabrics")?;

        let offset = self.rng.random_range(1..=config.date_window_days);
        let date_added = self
            .today
            .checked_sub_days(Days::new(u64::from(offset)))
            .ok_or(ConfigError::DateWindowTooLarge {
                days: config.date_window_days,
                today: self.today,
            })?;

        Ok(Product {
            id,
            name: format!("{sub_category} {name_color}"),
            category: profile.category,
            sub_category,
            price,
            color,
            fabric,
            units_sold,
            revenue,
            stock_status,
            rating,
            num_reviews,
            performance_tier,
            date_added,
        })
    }

    fn pick(&mut self, vocabulary: &[String], name: &'static str) -> Result<String, ConfigError> {
        vocabulary
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ConfigError::EmptyVocabulary(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interval;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn test_generator_rejects_invalid_tables() {
        let mut config = GeneratorConfig::default();
        config.fabrics.clear();
        let result = CatalogGenerator::new(&config, StdRng::seed_from_u64(1), today());
        assert!(matches!(result, Err(ConfigError::EmptyVocabulary("fabrics"))));
    }

    #[test]
    fn test_oversized_date_window_fails_before_any_row() {
        let config = GeneratorConfig {
            date_window_days: 200_000_000,
            ..GeneratorConfig::default()
        };
        let result = generate(&config, 1, today());
        assert!(matches!(
            result,
            Err(ConfigError::DateWindowTooLarge { days: 200_000_000, .. })
        ));
    }

    #[test]
    fn test_premium_never_applies_at_zero_probability() {
        let config = GeneratorConfig {
            premium_probability: 0.0,
            ..GeneratorConfig::default()
        };
        let catalog = generate(&config, 9, today()).unwrap();
        for product in &catalog {
            let range = config.category(product.category).unwrap().price;
            assert!(product.price >= range.min && product.price <= range.max);
        }
    }

    #[test]
    fn test_premium_always_applies_at_full_probability() {
        let config = GeneratorConfig {
            premium_probability: 1.0,
            premium_multiplier: Interval::new(2.0, 2.5),
            ..GeneratorConfig::default()
        };
        let catalog = generate(&config, 9, today()).unwrap();
        for product in &catalog {
            let range = config.category(product.category).unwrap().price;
            assert!(product.price >= round2(range.min * 2.0));
        }
    }

    #[test]
    fn test_sequential_ids() {
        let catalog = generate(&GeneratorConfig::default(), 42, today()).unwrap();
        for (i, product) in catalog.iter().enumerate() {
            assert_eq!(product.id, ProductId(i as u32 + 1));
        }
        assert_eq!(catalog.products()[0].id.to_string(), "TSI0001");
        assert_eq!(catalog.products()[1519].id.to_string(), "TSI1520");
    }

    #[test]
    fn test_name_is_sub_category_and_color() {
        let config = GeneratorConfig::default();
        let catalog = generate(&config, 3, today()).unwrap();
        for product in &catalog {
            let suffix = product
                .name
                .strip_prefix(product.sub_category.as_str())
                .expect("name starts with the sub-category");
            let color = suffix.trim_start();
            assert!(config.colors.iter().any(|c| c == color), "{color}");
        }
    }
}
