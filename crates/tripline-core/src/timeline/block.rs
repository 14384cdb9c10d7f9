//! Contiguous block detection.
//!
//! A block is the maximal run of scheduled entries around a target whose
//! consecutive gaps stay within a small tolerance. Blocks tell the conflict
//! engine which neighbors move together when a placement shifts; they are
//! derived on demand and never persisted.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Maximum gap between consecutive entries that still counts as contiguous.
/// Absorbs rounding jitter between consecutive bookings without fusing
/// genuinely separate free time.
pub const BLOCK_GAP_TOLERANCE_MINUTES: i64 = 2;

/// A maximal run of time-contiguous scheduled entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Members in start-time order.
    pub entries: Vec<Entry>,
}

impl Block {
    /// Movement segments (transfers) within the block.
    pub fn transport_entries(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.category.is_transport())
            .collect()
    }

    /// Destination segments within the block.
    pub fn event_entries(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| !e.category.is_transport())
            .collect()
    }

    /// True if any member is lock-flagged. Locked members forbid automatic
    /// cascading shifts of the block.
    pub fn has_locked_entry(&self) -> bool {
        self.entries.iter().any(|e| e.locked)
    }

    /// The members following `id`, used when only downstream entries
    /// should shift. Empty if `id` is not a member or is the last one.
    pub fn entries_after(&self, id: &str) -> &[Entry] {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => &self.entries[index + 1..],
            None => &[],
        }
    }
}

/// Find the maximal contiguous block containing `target_id`.
///
/// Only scheduled entries participate. Returns `None` if the target is
/// missing or unscheduled. Overlapping neighbors (negative gap) are always
/// contiguous.
pub fn find_block(target_id: &str, entries: &[Entry]) -> Option<Block> {
    let mut scheduled: Vec<Entry> = entries.iter().filter(|e| e.scheduled).cloned().collect();
    scheduled.sort_by_key(|e| e.start_time);

    let target = scheduled.iter().position(|e| e.id == target_id)?;
    let tolerance = Duration::minutes(BLOCK_GAP_TOLERANCE_MINUTES);

    let mut first = target;
    while first > 0 {
        let gap = scheduled[first].start_time - scheduled[first - 1].end_time;
        if gap > tolerance {
            break;
        }
        first -= 1;
    }

    let mut last = target;
    while last + 1 < scheduled.len() {
        let gap = scheduled[last + 1].start_time - scheduled[last].end_time;
        if gap > tolerance {
            break;
        }
        last += 1;
    }

    Some(Block {
        entries: scheduled[first..=last].to_vec(),
    })
}
