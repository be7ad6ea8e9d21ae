//! Highest-value cart selection.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::types::{Cart, Product, ProductId};

/// Price a cart's line items against a product index.
///
/// Lines referencing a product missing from the index contribute zero.
fn cart_total(cart: &Cart, catalog: &HashMap<ProductId, &Product>) -> Decimal {
    cart.products
        .iter()
        .map(|line| {
            catalog.get(&line.product_id).map_or(Decimal::ZERO, |product| {
                product.price * Decimal::from(line.quantity)
            })
        })
        .sum()
}

/// Find the cart with the greatest total value (unit price times quantity,
/// summed over its line items).
///
/// Ties keep the first cart in input order; only a strictly greater total
/// replaces the current winner. Returns `None` when no cart totals above
/// zero, so callers never see a fabricated winner for an empty list.
#[must_use]
pub fn highest_value_cart<'a>(
    carts: &'a [Cart],
    products: &[Product],
) -> Option<(&'a Cart, Decimal)> {
    let catalog: HashMap<ProductId, &Product> =
        products.iter().map(|product| (product.id, product)).collect();

    let mut best: Option<(&Cart, Decimal)> = None;
    for cart in carts {
        let total = cart_total(cart, &catalog);
        if total > best.map_or(Decimal::ZERO, |(_, value)| value) {
            best = Some((cart, total));
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
