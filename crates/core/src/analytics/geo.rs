//! Great-circle distances between users.

use crate::types::{GeoLocation, User};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, by the haversine
/// formula over a spherical Earth.
///
/// Symmetric in its arguments; inputs are decimal degrees.
#[must_use]
pub fn distance_km(from: &GeoLocation, to: &GeoLocation) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_long = (to.long - from.long).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_long / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// The most distant pair of users, by index into the scanned slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarthestPair {
    /// Great-circle distance between the two users, in kilometers.
    pub distance_km: f64,
    /// Index of the first user of the pair.
    pub first: usize,
    /// Index of the second user of the pair. Always greater than `first`.
    pub second: usize,
}

/// Scan every unordered user pair for the greatest great-circle distance.
///
/// Pairs are visited in index order with `first < second`; the first pair
/// seen becomes the initial candidate and only a strictly greater distance
/// replaces it, so ties keep the earliest pair. Returns `None` for fewer
/// than two users. Quadratic in the user count, which stays in the tens for
/// this API.
#[must_use]
pub fn farthest_pair(users: &[User]) -> Option<FarthestPair> {
    let mut best: Option<FarthestPair> = None;
    for (first, a) in users.iter().enumerate() {
        for (second, b) in users.iter().enumerate().skip(first + 1) {
            let distance = distance_km(&a.address.geolocation, &b.address.geolocation);
            if best.is_none_or(|pair| distance > pair.distance_km) {
                best = Some(FarthestPair {
                    distance_km: distance,
                    first,
                    second,
                });
            }
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, Name, UserId};

    fn point(lat: f64, long: f64) -> GeoLocation {
        GeoLocation { lat, long }
    }

    fn user_at(id: u64, lat: f64, long: f64) -> User {
        User {
            id: UserId::new(id),
            name: Name {
                first_name: format!("user{id}"),
                last_name: "test".to_string(),
            },
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            phone: String::new(),
            address: Address {
                number: 1,
                street: "test street".to_string(),
                city: "testville".to_string(),
                zipcode: "00000".to_string(),
                geolocation: point(lat, long),
            },
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let kilcoole = point(-37.3159, 81.1496);
        assert!(distance_km(&kilcoole, &kilcoole).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = point(-37.3159, 81.1496);
        let b = point(40.3467, -30.1310);

        let forward = distance_km(&a, &b);
        let backward = distance_km(&b, &a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_span_half_circumference() {
        let here = point(0.0, 0.0);
        let there = point(0.0, 180.0);

        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_km(&here, &there) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_known_city_pair_distance() {
        // London to Paris, roughly 344 km
        let london = point(51.5074, -0.1278);
        let paris = point(48.8566, 2.3522);

        let distance = distance_km(&london, &paris);
        assert!((distance - 343.5).abs() < 1.0, "got {distance}");
    }

    #[test]
    fn test_farthest_pair_picks_extremes() {
        let users = vec![
            user_at(1, 0.0, 0.0),
            user_at(2, 0.0, 10.0),
            user_at(3, 0.0, 179.0),
        ];

        let pair = farthest_pair(&users).expect("pair");
        assert_eq!((pair.first, pair.second), (0, 2));
    }

    #[test]
    fn test_colocated_users_still_form_a_pair() {
        // Both fixture users sit on the same coordinates, so every distance
        // is zero and the first pair scanned must win.
        let users = vec![user_at(1, -37.3159, 81.1496), user_at(2, -37.3159, 81.1496)];

        let pair = farthest_pair(&users).expect("pair");
        assert!(pair.distance_km.abs() < 1e-9);
        assert_eq!((pair.first, pair.second), (0, 1));
    }

    #[test]
    fn test_equal_distances_keep_earliest_pair() {
        // (0, 1) and (0, 2) are both half the circumference; (1, 2) is zero
        let users = vec![
            user_at(1, 0.0, 0.0),
            user_at(2, 0.0, 180.0),
            user_at(3, 0.0, 180.0),
        ];

        let pair = farthest_pair(&users).expect("pair");
        assert_eq!((pair.first, pair.second), (0, 1));
    }

    #[test]
    fn test_fewer_than_two_users_yields_none() {
        assert!(farthest_pair(&[]).is_none());
        assert!(farthest_pair(&[user_at(1, 0.0, 0.0)]).is_none());
    }
}
