//! Pure data structures: the product record, its closed vocabularies and the
//! catalog table that holds them.

pub mod catalog;
pub mod category;
pub mod product;

pub use catalog::*;
pub use category::*;
pub use product::*;
