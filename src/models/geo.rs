//! Coordinate key for location-keyed map views.

use serde::{Deserialize, Serialize};

/// A `(longitude, latitude)` pair used as a map key.
///
/// Equality and hashing compare the raw `f64` bit patterns, so two schools
/// merge into one location entry only when their stored coordinates match
/// exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationKey {
    pub longitude: f64,
    pub latitude: f64,
}

impl LocationKey {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl PartialEq for LocationKey {
    fn eq(&self, other: &Self) -> bool {
        self.longitude.to_bits() == other.longitude.to_bits()
            && self.latitude.to_bits() == other.latitude.to_bits()
    }
}

impl Eq for LocationKey {}

impl std::hash::Hash for LocationKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.longitude.to_bits().hash(state);
        self.latitude.to_bits().hash(state);
    }
}
