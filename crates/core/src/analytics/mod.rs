//! Aggregations over fetched store data.
//!
//! Every function here is pure: inputs are borrowed, nothing is mutated or
//! cached, and running an aggregator twice over the same data yields the
//! same result.

pub mod carts;
pub mod categories;
pub mod geo;

pub use carts::highest_value_cart;
pub use categories::{CategoryValue, category_totals};
pub use geo::{FarthestPair, distance_km, farthest_pair};
