//! # Tripline Core Library
//!
//! This library provides the scheduling engine for Tripline, a shared
//! multi-day itinerary planner. It covers the timeline algorithms only:
//! rendering, persistence and the directions provider are external
//! collaborators wired in by the caller through plain in-process calls.
//!
//! ## Architecture
//!
//! - **Timeline**: pure column layout for overlapping entries and
//!   contiguous-block detection, recomputed from scratch on every change
//! - **Conflict Engine**: travel-time feasibility checks with ranked,
//!   caller-applied fix recommendations
//! - **History**: a domain-agnostic undo/redo stack over reversible
//!   asynchronous effects
//! - **Timezone**: wall-clock / UTC conversion, DST-correct
//!
//! ## Key Components
//!
//! - [`assign_columns`]: collision-free column assignment
//! - [`find_block`]: the movable block around an entry
//! - [`ConflictChecker`]: placement verdicts from a [`TravelTimeProvider`]
//! - [`UndoStack`]: reversible edit history
//! - [`local_to_utc`] / [`utc_to_local`]: timezone conversion

pub mod conflict;
pub mod entry;
pub mod error;
pub mod history;
pub mod refresh;
pub mod timeline;
pub mod timezone;

pub use conflict::{
    recommend_fixes, Conflict, ConflictChecker, LocationRef, PlacementVerdict, Recommendation,
    RecommendationKind, RouteEstimate, TravelMode, TravelTimeProvider,
};
pub use entry::{Coordinates, Entry, EntryCategory, EntryOption};
pub use error::{CoreError, ProviderError, Result, TimezoneError, ValidationError};
pub use history::{effect, Effect, UndoAction, UndoStack};
pub use refresh::ChangeCoalescer;
pub use timeline::{
    assign_columns, find_block, Block, LayoutResult, LayoutSpan, BLOCK_GAP_TOLERANCE_MINUTES,
};
pub use timezone::{is_valid_zone, local_to_utc, utc_to_local};
