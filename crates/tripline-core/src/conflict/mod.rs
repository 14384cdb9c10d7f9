//! Conflict detection and remediation.
//!
//! This module provides:
//! - The travel-time provider contract (external collaborator)
//! - Placement feasibility checks against both timeline neighbors
//! - Ranked, caller-applied fix recommendations

mod engine;
mod travel;

pub use engine::{
    recommend_fixes, Conflict, ConflictChecker, PlacementVerdict, Recommendation,
    RecommendationKind,
};
pub use travel::{resolve_location, LocationRef, RouteEstimate, TravelMode, TravelTimeProvider};
