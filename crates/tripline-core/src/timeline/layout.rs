//! Visual column assignment for temporally overlapping entries.
//!
//! Entries that overlap in time are fanned out into side-by-side columns so
//! none collide on screen. The layout is recomputed wholesale whenever the
//! visible entry set changes; results are never patched incrementally.

use serde::{Deserialize, Serialize};

/// An entry reduced to its time span on a shared day scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpan {
    pub id: String,
    pub start_minutes: i64,
    pub end_minutes: i64,
}

impl LayoutSpan {
    pub fn new(id: impl Into<String>, start_minutes: i64, end_minutes: i64) -> Self {
        Self {
            id: id.into(),
            start_minutes,
            end_minutes,
        }
    }
}

/// Column placement for one entry within its overlap cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub id: String,
    /// Zero-based column index.
    pub column: usize,
    /// Column count of this entry's cluster, not of the whole set.
    pub total_columns: usize,
}

/// Assign non-colliding columns to every span.
///
/// Spans are stable-sorted by `(start, end)`, partitioned into maximal
/// clusters of mutually reachable overlap, and each cluster is colored with
/// the earliest-available-column rule. That rule is optimal: a cluster's
/// column count equals its maximum number of simultaneously active spans.
///
/// Touching boundaries (one span ends exactly where the next starts) do not
/// overlap. Equal `(start, end)` pairs keep their input order, so identical
/// input always yields identical columns.
pub fn assign_columns(spans: &[LayoutSpan]) -> Vec<LayoutResult> {
    if spans.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&i| (spans[i].start_minutes, spans[i].end_minutes));

    let mut results = Vec::with_capacity(spans.len());
    let mut cluster: Vec<usize> = Vec::new();
    let mut cluster_end = i64::MIN;

    for &i in &order {
        let span = &spans[i];
        if !cluster.is_empty() && span.start_minutes >= cluster_end {
            layout_cluster(spans, &cluster, &mut results);
            cluster.clear();
            cluster_end = i64::MIN;
        }
        cluster.push(i);
        cluster_end = cluster_end.max(span.end_minutes);
    }
    layout_cluster(spans, &cluster, &mut results);

    results
}

/// Greedy interval coloring of one overlap cluster, in cluster order.
fn layout_cluster(spans: &[LayoutSpan], members: &[usize], out: &mut Vec<LayoutResult>) {
    // Each column remembers the end of its last-placed span.
    let mut column_ends: Vec<i64> = Vec::new();
    let mut placed: Vec<(usize, usize)> = Vec::with_capacity(members.len());

    for &i in members {
        let span = &spans[i];
        let column = match column_ends
            .iter()
            .position(|&end| end <= span.start_minutes)
        {
            Some(column) => column,
            None => {
                column_ends.push(i64::MIN);
                column_ends.len() - 1
            }
        };
        column_ends[column] = span.end_minutes;
        placed.push((i, column));
    }

    let total_columns = column_ends.len();
    for (i, column) in placed {
        out.push(LayoutResult {
            id: spans[i].id.clone(),
            column,
            total_columns,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn span(id: &str, start: i64, end: i64) -> LayoutSpan {
        LayoutSpan::new(id, start, end)
    }

    fn by_id(results: &[LayoutResult]) -> HashMap<&str, &LayoutResult> {
        results.iter().map(|r| (r.id.as_str(), r)).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(assign_columns(&[]).is_empty());
    }

    #[test]
    fn test_lone_entry_gets_single_column() {
        let results = assign_columns(&[span("a", 540, 600)]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].column, 0);
        assert_eq!(results[0].total_columns, 1);
    }

    #[test]
    fn test_two_overlapping_plus_one_separate() {
        // A(09:00-10:00), B(09:30-10:30), C(11:00-12:00)
        let results = assign_columns(&[
            span("a", 540, 600),
            span("b", 570, 630),
            span("c", 660, 720),
        ]);
        let map = by_id(&results);

        assert_eq!((map["a"].column, map["a"].total_columns), (0, 2));
        assert_eq!((map["b"].column, map["b"].total_columns), (1, 2));
        assert_eq!((map["c"].column, map["c"].total_columns), (0, 1));
    }

    #[test]
    fn test_boundary_touch_does_not_overlap() {
        let results = assign_columns(&[span("a", 540, 600), span("b", 600, 660)]);
        let map = by_id(&results);

        // Separate clusters: both sit in column 0 of a single-column cluster.
        assert_eq!((map["a"].column, map["a"].total_columns), (0, 1));
        assert_eq!((map["b"].column, map["b"].total_columns), (0, 1));
    }

    #[test]
    fn test_column_reuse_within_cluster() {
        // B bridges A and C, so all three share one cluster, but C can
        // reuse A's column.
        let results = assign_columns(&[
            span("a", 540, 600),
            span("b", 570, 700),
            span("c", 610, 680),
        ]);
        let map = by_id(&results);

        assert_eq!(map["a"].column, 0);
        assert_eq!(map["b"].column, 1);
        assert_eq!(map["c"].column, 0);
        for r in &results {
            assert_eq!(r.total_columns, 2);
        }
    }

    #[test]
    fn test_equal_spans_keep_input_order() {
        let results = assign_columns(&[
            span("first", 540, 600),
            span("second", 540, 600),
            span("third", 540, 600),
        ]);
        let map = by_id(&results);

        assert_eq!(map["first"].column, 0);
        assert_eq!(map["second"].column, 1);
        assert_eq!(map["third"].column, 2);
        assert_eq!(map["first"].total_columns, 3);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let spans = vec![
            span("a", 0, 120),
            span("b", 30, 60),
            span("c", 30, 60),
            span("d", 90, 150),
        ];
        assert_eq!(assign_columns(&spans), assign_columns(&spans));
    }

    /// Maximum number of spans simultaneously active at any instant.
    fn max_concurrency(spans: &[LayoutSpan]) -> usize {
        let mut points: Vec<(i64, i64)> = Vec::new();
        for s in spans {
            points.push((s.start_minutes, 1));
            points.push((s.end_minutes, -1));
        }
        // Ends sort before starts at the same instant: touch is not overlap.
        points.sort_by_key(|&(at, delta)| (at, delta));

        let mut active = 0i64;
        let mut peak = 0i64;
        for (_, delta) in points {
            active += delta;
            peak = peak.max(active);
        }
        peak as usize
    }

    proptest! {
        #[test]
        fn property_no_two_spans_in_one_column_overlap(
            raw in prop::collection::vec((0i64..1440, 1i64..300), 0..12)
        ) {
            let spans: Vec<LayoutSpan> = raw
                .iter()
                .enumerate()
                .map(|(i, &(start, len))| span(&format!("s{i}"), start, start + len))
                .collect();

            let results = assign_columns(&spans);
            prop_assert_eq!(results.len(), spans.len());

            let lookup: HashMap<&str, &LayoutSpan> =
                spans.iter().map(|s| (s.id.as_str(), s)).collect();

            for a in &results {
                for b in &results {
                    if a.id == b.id || a.column != b.column {
                        continue;
                    }
                    let (sa, sb) = (lookup[a.id.as_str()], lookup[b.id.as_str()]);
                    let overlap = sa.start_minutes < sb.end_minutes
                        && sa.end_minutes > sb.start_minutes;
                    prop_assert!(!overlap, "{} and {} share column {}", a.id, b.id, a.column);
                }
            }
        }

        #[test]
        fn property_widest_cluster_matches_peak_concurrency(
            raw in prop::collection::vec((0i64..1440, 1i64..300), 1..12)
        ) {
            let spans: Vec<LayoutSpan> = raw
                .iter()
                .enumerate()
                .map(|(i, &(start, len))| span(&format!("s{i}"), start, start + len))
                .collect();

            let results = assign_columns(&spans);
            let widest = results.iter().map(|r| r.total_columns).max().unwrap_or(0);
            prop_assert_eq!(widest, max_concurrency(&spans));
        }
    }
}
