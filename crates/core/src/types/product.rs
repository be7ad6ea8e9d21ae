//! Product records as served by the `/products` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the store catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. Decimal so money sums stay exact.
    pub price: Decimal,
    /// Free-text category label. Matching is exact; casing matters.
    pub category: String,
    /// Long-form description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Review rating summary.
    pub rating: Rating,
}

/// Review rating summary for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average review score.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

// ============================================================================
// Tests
// ============================================================================
