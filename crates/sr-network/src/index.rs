//! Nearest-node spatial index.
//!
//! # Metric
//!
//! Nearest means smallest **haversine** distance.  Rather than running an
//! R-tree over raw `(lat, lng)` (where Euclidean distance is wrong away from
//! the equator and across the antimeridian), each node is projected onto the
//! unit sphere and the R-tree stores 3-D points.  Chord length is monotone in
//! great-circle distance, so the R-tree's nearest neighbour is the haversine
//! nearest neighbour and queries stay O(log N).
//!
//! # Ties
//!
//! Points at exactly the same haversine distance resolve to the lowest
//! [`NodeId`].  Chord lengths of equidistant points can differ in the last
//! bit, so every candidate whose squared chord lies within a rounding window
//! of the best one is re-ranked by `(haversine distance, id)`.  This is the
//! same ranking [`linear_nearest`] applies, so both always agree.
//!
//! # Invalid queries
//!
//! A query coordinate that is not finite or lies outside the WGS-84 ranges
//! matches no node.

use std::cmp::Ordering;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sr_core::{GeoPoint, NodeId};

use crate::GraphStore;

/// Relative and absolute slack on squared chord length, well above the
/// rounding error of `unit_vector` differences.
const CHORD_2_REL_SLACK: f64 = 1e-9;
const CHORD_2_ABS_SLACK: f64 = 1e-15;

#[inline]
fn tie_window(chord_2: f64) -> f64 {
    chord_2 + chord_2 * CHORD_2_REL_SLACK + CHORD_2_ABS_SLACK
}

/// Order by `(distance, id)`.
#[inline]
fn by_distance_then_id(a: &(f64, NodeId), b: &(f64, NodeId)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a unit-sphere point plus the node's stable id
/// and original coordinate.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 3],
    pos:   GeoPoint,
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// Maps arbitrary coordinates to the nearest node of one [`GraphStore`].
///
/// Built once per graph version and never modified afterwards.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<NodeEntry>,
}

impl SpatialIndex {
    /// An index with no entries; every query returns `None`.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index over every node of `store`.
    ///
    /// Time complexity: O(N log N).
    pub fn build(store: &GraphStore) -> Self {
        let entries: Vec<NodeEntry> = store
            .nodes()
            .map(|n| NodeEntry { point: n.pos.unit_vector(), pos: n.pos, id: n.id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The node nearest to `pos`.  `None` if the index is empty or `pos` is
    /// not a valid coordinate.
    pub fn nearest(&self, pos: GeoPoint) -> Option<NodeId> {
        self.nearest_with_distance(pos).map(|(_, id)| id)
    }

    /// Like [`nearest`](Self::nearest) but ignores nodes farther than
    /// `max_distance_m` metres from `pos`.
    pub fn nearest_within(&self, pos: GeoPoint, max_distance_m: f64) -> Option<NodeId> {
        self.nearest_with_distance(pos)
            .filter(|&(d, _)| d <= max_distance_m)
            .map(|(_, id)| id)
    }

    /// Up to `k` nearest nodes to `pos`, sorted by ascending distance (ties
    /// by ascending id).
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        if k == 0 || !pos.is_valid() {
            return Vec::new();
        }
        let q = pos.unit_vector();
        let mut hits: Vec<(f64, NodeId)> = Vec::with_capacity(k);
        let mut cutoff = f64::INFINITY;
        for (entry, d2) in self.tree.nearest_neighbor_iter_with_distance_2(&q) {
            if d2 > cutoff {
                break;
            }
            hits.push((pos.distance_m(entry.pos), entry.id));
            if hits.len() == k {
                cutoff = tie_window(d2);
            }
        }
        hits.sort_by(by_distance_then_id);
        hits.truncate(k);
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Nearest `(haversine metres, id)`, with lowest-id tie-break.
    fn nearest_with_distance(&self, pos: GeoPoint) -> Option<(f64, NodeId)> {
        if !pos.is_valid() {
            return None;
        }
        let q = pos.unit_vector();
        let mut iter = self.tree.nearest_neighbor_iter_with_distance_2(&q).peekable();
        let window = tie_window(iter.peek()?.1);
        iter.take_while(|&(_, d2)| d2 <= window)
            .map(|(e, _)| (pos.distance_m(e.pos), e.id))
            .min_by(by_distance_then_id)
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Linear-scan fallback ──────────────────────────────────────────────────────

/// Nearest node of `store` to `pos` by scanning every node.
///
/// O(N) per query.  Adequate for tiny graphs; [`SpatialIndex`] is the
/// scaling path.  Ranks exactly like [`SpatialIndex::nearest`].
pub fn linear_nearest(store: &GraphStore, pos: GeoPoint) -> Option<NodeId> {
    if !pos.is_valid() {
        return None;
    }
    store
        .nodes()
        .map(|n| (pos.distance_m(n.pos), n.id))
        .min_by(by_distance_then_id)
        .map(|(_, id)| id)
}
