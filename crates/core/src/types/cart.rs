//! Cart records as served by the `/carts` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CartId, ProductId, UserId};

/// A shopping cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart ID.
    pub id: CartId,
    /// Owning user's ID. Resolved against the user list by value, never by
    /// list position.
    pub user_id: UserId,
    /// When the cart was captured.
    pub date: DateTime<Utc>,
    /// Line items, in the order the API lists them.
    pub products: Vec<CartLine>,
}

/// One (product, quantity) line item within a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Referenced product ID. May point at a product missing from the
    /// catalog snapshot.
    pub product_id: ProductId,
    /// Number of units.
    pub quantity: u32,
}

// ============================================================================
// Tests
// ============================================================================
