//! Placement feasibility checks and remediation suggestions.
//!
//! A placement attempt is checked against both timeline neighbors: the
//! engine asks the travel-time provider for each leg concurrently, compares
//! required travel against the scheduled gap, and reports shortfalls.
//! Failed or empty lookups produce no conflict (fail-open) -- absence of
//! evidence is not evidence of a conflict.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entry::Entry;
use crate::timeline::Block;

use super::travel::{resolve_location, TravelMode, TravelTimeProvider};

/// An entry must keep at least this much of its duration after a
/// shorten-style fix.
const MIN_REMAINING_MINUTES: i64 = 15;

/// A failed feasibility check for one leg of a placement.
///
/// `entry_title` names the destination of the leg; `shortfall_minutes` is
/// required travel time minus the available gap (always positive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub entry_title: String,
    pub shortfall_minutes: i64,
}

/// Verdict for one placement attempt. No conflicts means feasible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacementVerdict {
    pub conflicts: Vec<Conflict>,
}

impl PlacementVerdict {
    pub fn is_feasible(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// The edit a recommendation stands for. Recommendations are
/// self-describing, not self-applying: the caller performs the edit,
/// wrapped in an undo action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Push the downstream block later by `minutes`, starting at the anchor.
    ShiftBlockLater { anchor_id: String, minutes: i64 },
    /// Trim `minutes` off the end of one entry.
    ShortenEntry { entry_id: String, minutes: i64 },
    /// Drop the competing entry from the timeline.
    RemoveEntry { entry_id: String },
}

/// One candidate fix for a conflicted placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: Uuid,
    pub label: String,
    pub description: String,
    pub kind: RecommendationKind,
}

impl Recommendation {
    fn new(label: impl Into<String>, description: impl Into<String>, kind: RecommendationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            description: description.into(),
            kind,
        }
    }
}

/// Checks placement attempts against a travel-time provider.
pub struct ConflictChecker<P> {
    provider: P,
    mode: TravelMode,
}

impl<P: TravelTimeProvider> ConflictChecker<P> {
    /// Create a checker with the default travel mode (driving).
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            mode: TravelMode::Driving,
        }
    }

    /// Set the travel mode used for lookups.
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check a placement against its immediate neighbors.
    ///
    /// Both legs are looked up concurrently; a slow or failed leg never
    /// blocks the other. A leg whose endpoints lack location data, or whose
    /// lookup fails or comes back empty, yields no conflict.
    pub async fn check_placement(
        &self,
        placed: &Entry,
        predecessor: Option<&Entry>,
        successor: Option<&Entry>,
    ) -> PlacementVerdict {
        let (inbound, outbound) = tokio::join!(
            self.leg_conflict(predecessor, Some(placed)),
            self.leg_conflict(Some(placed), successor),
        );

        PlacementVerdict {
            conflicts: inbound.into_iter().chain(outbound).collect(),
        }
    }

    /// Feasibility of one leg. `None` when the leg is absent, unlocatable,
    /// unknown to the provider, or simply feasible.
    async fn leg_conflict(&self, from: Option<&Entry>, to: Option<&Entry>) -> Option<Conflict> {
        let from = from?;
        let to = to?;
        let from_location = resolve_location(from)?;
        let to_location = resolve_location(to)?;

        let available_minutes = (to.start_time - from.end_time).num_minutes();
        let estimate = match self
            .provider
            .route(&from_location, &to_location, self.mode)
            .await
        {
            Ok(Some(estimate)) => estimate,
            // Fail-open: no evidence is not a conflict.
            Ok(None) | Err(_) => return None,
        };

        let shortfall = estimate.duration_minutes - available_minutes;
        if shortfall > 0 {
            Some(Conflict {
                entry_title: to.title.clone(),
                shortfall_minutes: shortfall,
            })
        } else {
            None
        }
    }
}

/// Build the ranked fix list for one conflict, least destructive first:
/// shift the downstream block, shorten the adjoining entry, remove it.
///
/// `neighbor` is the entry competing with the placement on the conflicted
/// leg; `downstream_block` is the block that would move with it (from
/// [`crate::timeline::find_block`]). Shifting is withheld when the block
/// contains a locked entry; shortening when the neighbor would drop below
/// 15 minutes. Removal always applies, so the list is never empty.
pub fn recommend_fixes(
    conflict: &Conflict,
    neighbor: &Entry,
    downstream_block: Option<&Block>,
) -> Vec<Recommendation> {
    let shortfall = conflict.shortfall_minutes;
    let mut fixes = Vec::new();

    if let Some(block) = downstream_block {
        if !block.has_locked_entry() {
            fixes.push(Recommendation::new(
                "Shift later plans",
                format!(
                    "Move \"{}\" and the {} following entries {} minutes later",
                    neighbor.title,
                    block.entries_after(&neighbor.id).len(),
                    shortfall
                ),
                RecommendationKind::ShiftBlockLater {
                    anchor_id: neighbor.id.clone(),
                    minutes: shortfall,
                },
            ));
        }
    }

    if neighbor.duration_minutes() - shortfall >= MIN_REMAINING_MINUTES {
        fixes.push(Recommendation::new(
            format!("Shorten \"{}\"", neighbor.title),
            format!(
                "Trim {} minutes off \"{}\" to make room for travel",
                shortfall, neighbor.title
            ),
            RecommendationKind::ShortenEntry {
                entry_id: neighbor.id.clone(),
                minutes: shortfall,
            },
        ));
    }

    fixes.push(Recommendation::new(
        format!("Remove \"{}\"", neighbor.title),
        format!("Take \"{}\" off the timeline", neighbor.title),
        RecommendationKind::RemoveEntry {
            entry_id: neighbor.id.clone(),
        },
    ));

    fixes
}
