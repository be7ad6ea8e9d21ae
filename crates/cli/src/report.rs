//! Report assembly and rendering.
//!
//! [`StoreReport::build`] runs the aggregators over a fetched snapshot;
//! the [`Display`](fmt::Display) impl renders the console summary. Building
//! is pure, so one snapshot always renders the same report.

use std::fmt;

use rust_decimal::Decimal;
use tracing::warn;

use storelens_core::{
    Cart, CartId, CategoryValue, User, category_totals, farthest_pair, highest_value_cart,
};

use crate::fakestore::StoreSnapshot;

/// Aggregated report over one store snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreReport {
    /// Price totals per category, sorted by label for stable display.
    pub category_totals: Vec<CategoryValue>,
    /// The most valuable cart, when any cart totals above zero.
    pub top_cart: Option<TopCart>,
    /// The geographically farthest user pair, when there are two users.
    pub farthest_users: Option<FarthestUsers>,
}

/// The winning cart and its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCart {
    /// ID of the winning cart.
    pub cart_id: CartId,
    /// Total value of the cart's line items.
    pub total: Decimal,
    /// The owner, when the cart's user id matches a fetched user.
    pub owner: Option<CartOwner>,
}

/// Display data for the owner of the winning cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOwner {
    /// Full name.
    pub name: String,
    /// Login name.
    pub username: String,
}

/// Display data for the farthest-apart user pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FarthestUsers {
    /// Great-circle distance between the two users, in kilometers.
    pub distance_km: f64,
    /// First endpoint of the pair.
    pub first: UserPlace,
    /// Second endpoint of the pair.
    pub second: UserPlace,
}

/// A user's name and city, as the distance line prints them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPlace {
    /// Full name.
    pub name: String,
    /// City from the user's address.
    pub city: String,
}

impl From<&User> for UserPlace {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.to_string(),
            city: user.address.city.clone(),
        }
    }
}

impl StoreReport {
    /// Aggregate a snapshot into report figures.
    #[must_use]
    pub fn build(snapshot: &StoreSnapshot) -> Self {
        let mut category_totals = category_totals(&snapshot.products);
        category_totals.sort_by(|a, b| a.category.cmp(&b.category));

        let top_cart =
            highest_value_cart(&snapshot.carts, &snapshot.products).map(|(cart, total)| TopCart {
                cart_id: cart.id,
                total,
                owner: find_owner(cart, &snapshot.users),
            });

        let farthest_users = farthest_pair(&snapshot.users).and_then(|pair| {
            let first = snapshot.users.get(pair.first)?;
            let second = snapshot.users.get(pair.second)?;
            Some(FarthestUsers {
                distance_km: pair.distance_km,
                first: UserPlace::from(first),
                second: UserPlace::from(second),
            })
        });

        Self {
            category_totals,
            top_cart,
            farthest_users,
        }
    }
}

/// Resolve a cart's owner by id match, never by list position.
fn find_owner(cart: &Cart, users: &[User]) -> Option<CartOwner> {
    let owner = users.iter().find(|user| user.id == cart.user_id);
    if owner.is_none() {
        warn!(cart_id = %cart.id, user_id = %cart.user_id, "cart owner not in user list");
    }

    owner.map(|user| CartOwner {
        name: user.name.to_string(),
        username: user.username.clone(),
    })
}

impl fmt::Display for StoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Category values:")?;
        if self.category_totals.is_empty() {
            writeln!(f, "  (no products)")?;
        }
        for entry in &self.category_totals {
            writeln!(f, "  {}: {:.2}", entry.category, entry.total)?;
        }

        match &self.top_cart {
            Some(cart) => {
                let (name, username) = cart
                    .owner
                    .as_ref()
                    .map_or(("unknown", "unknown"), |owner| {
                        (owner.name.as_str(), owner.username.as_str())
                    });
                writeln!(
                    f,
                    "Highest value cart id: {} (Value: {:.2}, Owner name: {} Owner username: {})",
                    cart.cart_id, cart.total, name, username
                )?;
            }
            None => writeln!(f, "Highest value cart: none (no cart totals above zero)")?,
        }

        match &self.farthest_users {
            Some(pair) => writeln!(
                f,
                "Biggest distance = {:.2} km between {} from {} and {} from {}",
                pair.distance_km, pair.first.name, pair.first.city, pair.second.name,
                pair.second.city
            ),
            None => writeln!(f, "Biggest distance: n/a (fewer than two users)"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
