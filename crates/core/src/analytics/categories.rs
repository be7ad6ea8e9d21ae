//! Per-category price totals.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::types::Product;

/// Summed price total for one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryValue {
    /// Category label, exactly as it appears on the products.
    pub category: String,
    /// Sum of the unit prices of every product carrying the label.
    pub total: Decimal,
}

/// Sum product unit prices per category label.
///
/// Labels are matched exactly, with no trimming or case folding, so
/// `"Electronics"` and `"electronics"` land in separate buckets. Quantities
/// play no part here; each product counts once. The output order is
/// unspecified, and the totals always add up to the sum of all product
/// prices.
#[must_use]
pub fn category_totals(products: &[Product]) -> Vec<CategoryValue> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for product in products {
        *totals.entry(product.category.as_str()).or_default() += product.price;
    }

    totals
        .into_iter()
        .map(|(category, total)| CategoryValue {
            category: category.to_owned(),
            total,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductId, Rating};

    fn product(id: u64, price: Decimal, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("product {id}"),
            price,
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            rating: Rating {
                rate: 4.0,
                count: 10,
            },
        }
    }

    fn total_for(totals: &[CategoryValue], category: &str) -> Option<Decimal> {
        totals
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    #[test]
    fn test_totals_group_by_label() {
        let products = vec![
            product(1, Decimal::new(10995, 2), "men's clothing"),
            product(2, Decimal::new(2230, 2), "men's clothing"),
            product(3, Decimal::new(6400, 2), "electronics"),
        ];

        let totals = category_totals(&products);

        assert_eq!(totals.len(), 2);
        assert_eq!(
            total_for(&totals, "men's clothing"),
            Some(Decimal::new(13225, 2))
        );
        assert_eq!(total_for(&totals, "electronics"), Some(Decimal::new(6400, 2)));
    }

    #[test]
    fn test_totals_cover_every_product_exactly_once() {
        let products = vec![
            product(1, Decimal::new(100, 2), "a"),
            product(2, Decimal::new(250, 2), "b"),
            product(3, Decimal::new(999, 2), "a"),
            product(4, Decimal::new(1, 2), "c"),
        ];

        let grand_total: Decimal = category_totals(&products)
            .iter()
            .map(|entry| entry.total)
            .sum();
        let price_sum: Decimal = products.iter().map(|p| p.price).sum();

        assert_eq!(grand_total, price_sum);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let products = vec![
            product(1, Decimal::new(500, 2), "Electronics"),
            product(2, Decimal::new(700, 2), "electronics"),
        ];

        let totals = category_totals(&products);

        assert_eq!(totals.len(), 2);
        assert_eq!(total_for(&totals, "Electronics"), Some(Decimal::new(500, 2)));
        assert_eq!(total_for(&totals, "electronics"), Some(Decimal::new(700, 2)));
    }

    #[test]
    fn test_empty_catalog_yields_no_totals() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_totals_are_deterministic() {
        let products = vec![
            product(1, Decimal::new(10995, 2), "men's clothing"),
            product(2, Decimal::new(6400, 2), "electronics"),
        ];

        let mut first = category_totals(&products);
        let mut second = category_totals(&products);
        first.sort_by(|a, b| a.category.cmp(&b.category));
        second.sort_by(|a, b| a.category.cmp(&b.category));

        assert_eq!(first, second);
    }
}
