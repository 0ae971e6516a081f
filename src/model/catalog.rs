//! The in-memory product table.
//!
//! A [`Catalog`] is built once (by the generator or by reading a persisted
//! CSV) and exposes no mutating API afterwards.

use crate::model::{Category, Product};

/// Immutable sequence of [`Product`] rows in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Rows of one category, in table order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Categories that own at least one row, in declaration order.
    pub fn categories(&self) -> Vec<Category> {
        let mut present = [false; Category::ALL.len()];
        for product in &self.products {
            present[product.category.index()] = true;
        }
        Category::ALL
            .into_iter()
            .filter(|c| present[c.index()])
            .collect()
    }

    pub fn total_revenue(&self) -> f64 {
        self.products.iter().map(|p| p.revenue).sum()
    }

    pub fn total_units(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.units_sold)).sum()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
