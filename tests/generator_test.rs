use catalog_analytics::config::GeneratorConfig;
use catalog_analytics::export::write_catalog_to;
use catalog_analytics::generator::generate;
use catalog_analytics::model::{round2, Catalog, Category, PerformanceTier};
use chrono::NaiveDate;
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
}

fn reference_catalog(seed: u64) -> Catalog {
    generate(&GeneratorConfig::default(), seed, today()).unwrap()
}

fn csv_bytes(catalog: &Catalog) -> Vec<u8> {
    let mut out = Vec::new();
    write_catalog_to(catalog, &mut out).unwrap();
    out
}

/// Row-level invariants that hold for any seed.
fn assert_row_invariants(config: &GeneratorConfig, catalog: &Catalog) {
    for product in catalog {
        let profile = config.category(product.category).unwrap();
        assert!(profile.sub_categories.contains(&product.sub_category));
        assert_eq!(product.revenue, round2(product.price * f64::from(product.units_sold)));
        assert!(product.num_reviews >= 1);
        assert!(product.price >= profile.price.min);
        assert!(product.price <= round2(profile.price.max * config.premium_multiplier.max));

        let tier = config.tier(product.performance_tier).unwrap();
        assert!(tier.units_sold.contains(product.units_sold));
        assert!(product.rating >= tier.rating.min && product.rating <= tier.rating.max);

        let age = (today() - product.date_added).num_days();
        assert!((1..=i64::from(config.date_window_days)).contains(&age));
        assert!(product.name.starts_with(&product.sub_category));
        assert!(config.colors.contains(&product.color));
        assert!(config.fabrics.contains(&product.fabric));
    }
}

#[test]
fn test_reference_counts_per_category() {
    let config = GeneratorConfig::default();
    let catalog = reference_catalog(42);
    assert_eq!(catalog.len(), 1520);
    for category in Category::ALL {
        let expected = config.category(category).unwrap().count as usize;
        assert_eq!(catalog.in_category(category).count(), expected, "{category}");
    }
}

#[test]
fn test_categories_form_contiguous_blocks_in_declaration_order() {
    let catalog = reference_catalog(42);
    let mut order: Vec<Category> = Vec::new();
    for product in &catalog {
        if order.last() != Some(&product.category) {
            order.push(product.category);
        }
    }
    assert_eq!(order, Category::ALL.to_vec());
}

#[test]
fn test_ids_are_sequential() {
    let catalog = reference_catalog(42);
    for (i, product) in catalog.iter().enumerate() {
        assert_eq!(product.id.0 as usize, i + 1);
    }
    assert_eq!(catalog.products()[0].id.to_string(), "TSI0001");
    assert_eq!(catalog.products()[1519].id.to_string(), "TSI1520");
}

#[test]
fn test_reference_rows_satisfy_invariants() {
    assert_row_invariants(&GeneratorConfig::default(), &reference_catalog(42));
}

#[test]
fn test_every_tier_occurs() {
    let catalog = reference_catalog(42);
    for tier in PerformanceTier::ALL {
        assert!(catalog.iter().any(|p| p.performance_tier == tier), "{tier}");
    }
}

#[test]
fn test_same_seed_and_date_give_identical_bytes() {
    assert_eq!(csv_bytes(&reference_catalog(42)), csv_bytes(&reference_catalog(42)));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(csv_bytes(&reference_catalog(42)), csv_bytes(&reference_catalog(43)));
}

#[test]
fn test_generation_date_anchors_date_added() {
    let config = GeneratorConfig::default();
    let later = today() + chrono::Days::new(10);
    let a = generate(&config, 5, today()).unwrap();
    let b = generate(&config, 5, later).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!((y.date_added - x.date_added).num_days(), 10);
        assert_eq!(x.price, y.price);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_invariants_hold_for_any_seed(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let catalog = generate(&config, seed, today()).unwrap();
        prop_assert_eq!(catalog.len(), 1520);
        assert_row_invariants(&config, &catalog);
    }
}
