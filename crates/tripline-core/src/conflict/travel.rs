//! Travel-time provider contract.
//!
//! The directions/geocoding service is an external collaborator behind a
//! trait. Implementations may cache; every call the engine makes must be
//! idempotent and safely repeatable.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entry::{Coordinates, Entry};
use crate::error::ProviderError;

/// How the group moves between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Driving,
    Transit,
}

/// Lookup key for a travel-time request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationRef {
    Coordinates { lat: f64, lng: f64 },
    Address(String),
}

/// A single directions result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub duration_minutes: i64,
    pub distance_meters: f64,
}

/// External travel-time collaborator.
#[async_trait]
pub trait TravelTimeProvider: Send + Sync {
    /// Estimated travel between two locations.
    ///
    /// `Ok(None)` means the provider found no route. The conflict engine
    /// treats both `Ok(None)` and `Err` as absence of evidence (fail-open).
    async fn route(
        &self,
        from: &LocationRef,
        to: &LocationRef,
        mode: TravelMode,
    ) -> Result<Option<RouteEstimate>, ProviderError>;
}

/// Derive the travel lookup key for an entry from its authoritative (first)
/// option, preferring explicit coordinates, then the named location, then
/// the free-text departure location.
///
/// `None` means the entry cannot participate in conflict checking and its
/// legs are treated as conflict-free.
pub fn resolve_location(entry: &Entry) -> Option<LocationRef> {
    let option = entry.primary_option()?;

    if let Some(Coordinates { lat, lng }) = option.coordinates {
        return Some(LocationRef::Coordinates { lat, lng });
    }
    if let Some(name) = non_blank(option.location_name.as_deref()) {
        return Some(LocationRef::Address(name));
    }
    non_blank(option.departure_location.as_deref()).map(LocationRef::Address)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
