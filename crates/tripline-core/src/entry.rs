//! Itinerary entry model.
//!
//! Entries and their options are owned by the persistence layer; the engine
//! only reads them and returns derived, disposable results. Everything here
//! is therefore plain data with a validated constructor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category tag for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    Transfer,
    Flight,
    Meal,
    Activity,
    Lodging,
}

impl EntryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Flight => "flight",
            Self::Meal => "meal",
            Self::Activity => "activity",
            Self::Lodging => "lodging",
        }
    }

    /// Whether this entry is a movement segment rather than a destination.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transfer)
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A concrete place or transport choice attached to an entry.
///
/// Only the first option of an entry is authoritative for layout and
/// conflict purposes; the rest are candidates the group is still voting on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryOption {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub departure_location: Option<String>,
}

impl EntryOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }

    pub fn with_location_name(mut self, location: impl Into<String>) -> Self {
        self.location_name = Some(location.into());
        self
    }

    pub fn with_departure_location(mut self, location: impl Into<String>) -> Self {
        self.departure_location = Some(location.into());
        self
    }
}

/// One scheduled or candidate item on the itinerary timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub category: EntryCategory,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Placed on the timeline, as opposed to sitting in the unscheduled tray.
    #[serde(default = "default_scheduled")]
    pub scheduled: bool,
    /// Excluded from automatic cascading shifts.
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub options: Vec<EntryOption>,
}

fn default_scheduled() -> bool {
    true
}

impl Entry {
    /// Create a new entry.
    ///
    /// # Panics
    /// Panics if `end_time < start_time`. Use [`try_new`](Self::try_new) for
    /// a non-panicking version.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: EntryCategory,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self::try_new(id, title, category, start_time, end_time)
            .expect("Entry::new: end_time must not be earlier than start_time")
    }

    /// Create a new entry, returning a Result.
    ///
    /// # Errors
    /// Returns an error if `end_time < start_time`. A zero-length entry is
    /// allowed.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: EntryCategory,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if end_time < start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            category,
            start_time,
            end_time,
            scheduled: true,
            locked: false,
            options: Vec::new(),
        })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this entry overlaps with another. Touching boundaries do
    /// not count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// The authoritative option (always the first), if any.
    pub fn primary_option(&self) -> Option<&EntryOption> {
        self.options.first()
    }

    /// Append a candidate option
    pub fn with_option(mut self, option: EntryOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the scheduling flag
    pub fn with_scheduled(mut self, scheduled: bool) -> Self {
        self.scheduled = scheduled;
        self
    }

    /// Set the lock flag
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}
