//! User records as served by the `/users` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A registered user of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Split first/last name, as the API serves it.
    pub name: Name,
    /// Login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address, including geolocation.
    pub address: Address,
}

/// A user's name, split into first and last parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// First name.
    #[serde(rename = "firstname")]
    pub first_name: String,
    /// Last name.
    #[serde(rename = "lastname")]
    pub last_name: String,
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// House number.
    pub number: u32,
    /// Street name.
    pub street: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Latitude/longitude of the address.
    pub geolocation: GeoLocation,
}

/// A latitude/longitude pair in decimal degrees.
///
/// The API serializes both coordinates as JSON strings
/// (`"lat": "-37.3159"`), so the fields go through the [`coord`] codec on
/// the wire instead of plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in decimal degrees, north positive.
    #[serde(with = "coord")]
    pub lat: f64,
    /// Longitude in decimal degrees, east positive.
    #[serde(with = "coord")]
    pub long: f64,
}

/// Serde codec for coordinates the API wraps in JSON strings.
mod coord {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
