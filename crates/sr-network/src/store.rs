//! Immutable road graph ("graph store").
//!
//! # Data layout
//!
//! Nodes are kept sorted by their stable [`NodeId`]; a node's position in that
//! order is its dense [`NodeIdx`].  Outgoing edges use **Compressed Sparse
//! Row (CSR)** format.  Given a `NodeIdx n`, its outgoing edges occupy:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Within one source node, edges keep the order in which they were supplied
//! to [`GraphStore::build`], so `neighbors()` is deterministic across
//! rebuilds of the same feed.
//!
//! # Immutability
//!
//! A `GraphStore` has no mutating methods.  A new road network means a new
//! `GraphStore`; replacing the one being served is the engine's job.

use rustc_hash::FxHashMap;

use sr_core::{EdgeIdx, GeoPoint, NodeId, NodeIdx};

use crate::{IngestionError, IngestionResult};

// ── Build inputs ──────────────────────────────────────────────────────────────

/// A road node: stable identifier plus position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

impl Node {
    #[inline]
    pub fn new(id: impl Into<NodeId>, lat: f64, lng: f64) -> Self {
        Self { id: id.into(), pos: GeoPoint::new(lat, lng) }
    }
}

/// A directed, weighted road segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:   NodeId,
    pub to:     NodeId,
    pub weight: f64,
}

impl Edge {
    #[inline]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self { from: from.into(), to: to.into(), weight }
    }

    /// Both directions of an undirected road with equal weight.
    pub fn road_pair(a: impl Into<NodeId>, b: impl Into<NodeId>, weight: f64) -> [Edge; 2] {
        let (a, b) = (a.into(), b.into());
        [Edge { from: a, to: b, weight }, Edge { from: b, to: a, weight }]
    }
}

// ── GraphStore ────────────────────────────────────────────────────────────────

/// Directed road graph in CSR format, keyed by stable [`NodeId`]s.
///
/// Construct with [`GraphStore::build`], which validates the whole input
/// before building anything.
#[derive(Debug, Clone)]
pub struct GraphStore {
    // ── Node data (indexed by NodeIdx) ────────────────────────────────────
    node_ids: Vec<NodeId>,
    node_pos: Vec<GeoPoint>,
    lookup:   FxHashMap<NodeId, NodeIdx>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeIdx) ────────────────────────────────────
    edge_to:     Vec<NodeIdx>,
    edge_weight: Vec<f64>,
}

impl GraphStore {
    /// A graph with no nodes or edges.  Every lookup misses and every route
    /// request against it resolves no endpoints.
    pub fn empty() -> Self {
        Self {
            node_ids:       Vec::new(),
            node_pos:       Vec::new(),
            lookup:         FxHashMap::default(),
            node_out_start: vec![0],
            edge_to:        Vec::new(),
            edge_weight:    Vec::new(),
        }
    }

    /// Validate `nodes` and `edges`, then build the CSR graph.
    ///
    /// Checks, in order: node and edge counts fit the dense `u32` slots,
    /// every coordinate is valid, no node id repeats, every edge endpoint is
    /// declared, every weight is finite and non-negative.  The first
    /// violation is returned and nothing is built.
    ///
    /// Time complexity: O(N log N + E log E).
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> IngestionResult<Self> {
        ensure_addressable::<NodeIdx>("nodes", nodes.len())?;
        ensure_addressable::<EdgeIdx>("edges", edges.len())?;

        // ── Validate nodes ────────────────────────────────────────────────
        if let Some(bad) = nodes.iter().find(|n| !n.pos.is_valid()) {
            return Err(IngestionError::InvalidCoordinate { id: bad.id, pos: bad.pos });
        }

        let mut nodes = nodes;
        nodes.sort_by_key(|n| n.id);
        if let Some(pair) = nodes.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(IngestionError::DuplicateNode(pair[0].id));
        }

        let mut lookup = FxHashMap::default();
        lookup.reserve(nodes.len());
        for (n, idx) in nodes.iter().zip((0u32..).map(NodeIdx)) {
            lookup.insert(n.id, idx);
        }

        // ── Validate edges and resolve endpoints ──────────────────────────
        let mut resolved: Vec<(NodeIdx, NodeIdx, f64)> = Vec::with_capacity(edges.len());
        for e in &edges {
            let endpoint = |id: NodeId| {
                lookup.get(&id).copied().ok_or(IngestionError::DanglingEdge {
                    from:    e.from,
                    to:      e.to,
                    missing: id,
                })
            };
            let from = endpoint(e.from)?;
            let to = endpoint(e.to)?;
            if !(e.weight.is_finite() && e.weight >= 0.0) {
                return Err(IngestionError::InvalidWeight {
                    from:   e.from,
                    to:     e.to,
                    weight: e.weight,
                });
            }
            resolved.push((from, to, e.weight));
        }

        // ── Build CSR ─────────────────────────────────────────────────────
        // Stable sort keeps per-source feed order.
        resolved.sort_by_key(|&(from, _, _)| from);

        let node_count = nodes.len();
        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &resolved {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, resolved.len());

        let edge_to: Vec<NodeIdx> = resolved.iter().map(|&(_, to, _)| to).collect();
        let edge_weight: Vec<f64> = resolved.iter().map(|&(_, _, w)| w).collect();

        Ok(Self {
            node_ids: nodes.iter().map(|n| n.id).collect(),
            node_pos: nodes.iter().map(|n| n.pos).collect(),
            lookup,
            node_out_start,
            edge_to,
            edge_weight,
        })
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    // ── Lookups by stable id ──────────────────────────────────────────────

    pub fn contains(&self, id: NodeId) -> bool {
        self.lookup.contains_key(&id)
    }

    /// Stored position of node `id`, if it exists in this version.
    pub fn position(&self, id: NodeId) -> Option<GeoPoint> {
        self.idx_of(id).map(|idx| self.pos_at(idx))
    }

    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.position(id).map(|pos| Node { id, pos })
    }

    /// Outgoing `(neighbor, weight)` pairs of `id` in feed order.
    ///
    /// Never fails: an unknown id yields nothing.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.idx_of(id)
            .into_iter()
            .flat_map(move |idx| self.out_edges(idx))
            .map(move |e| (self.id_at(self.edge_to(e)), self.edge_weight_at(e)))
    }

    /// Number of outgoing edges of `id` (0 for unknown ids).
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.idx_of(id).map_or(0, |idx| self.out_edges(idx).len())
    }

    /// Lowest weight among the edges `from -> to`, if any exist.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors(from)
            .filter(|&(n, _)| n == to)
            .map(|(_, w)| w)
            .reduce(f64::min)
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.node_ids
            .iter()
            .zip(&self.node_pos)
            .map(|(&id, &pos)| Node { id, pos })
    }

    /// All edges, grouped by source node in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let slots = (0u32..).map(NodeIdx);
        self.node_ids.iter().zip(slots).flat_map(move |(&from, idx)| {
            self.out_edges(idx).map(move |e| Edge {
                from,
                to:     self.id_at(self.edge_to(e)),
                weight: self.edge_weight_at(e),
            })
        })
    }

    // ── Dense-slot access (solver and index hot paths) ────────────────────
    //
    // Slots are only meaningful for the `GraphStore` that produced them.

    #[inline]
    pub fn idx_of(&self, id: NodeId) -> Option<NodeIdx> {
        self.lookup.get(&id).copied()
    }

    #[inline]
    pub fn id_at(&self, idx: NodeIdx) -> NodeId {
        self.node_ids[idx.index()]
    }

    #[inline]
    pub fn pos_at(&self, idx: NodeIdx) -> GeoPoint {
        self.node_pos[idx.index()]
    }

    /// `EdgeIdx`s of all outgoing edges from `idx`.
    ///
    /// This is a contiguous index range; no heap allocation.
    #[inline]
    pub fn out_edges(&self, idx: NodeIdx) -> impl ExactSizeIterator<Item = EdgeIdx> {
        let start = self.node_out_start[idx.index()];
        let end   = self.node_out_start[idx.index() + 1];
        (start..end).map(EdgeIdx)
    }

    #[inline]
    pub fn edge_to(&self, edge: EdgeIdx) -> NodeIdx {
        self.edge_to[edge.index()]
    }

    #[inline]
    pub fn edge_weight_at(&self, edge: EdgeIdx) -> f64 {
        self.edge_weight[edge.index()]
    }
}

/// Fail with [`IngestionError::TooLarge`] if `count` slots cannot all be
/// addressed by the dense index type `T`.
pub(crate) fn ensure_addressable<T: TryFrom<usize>>(what: &'static str, count: usize) -> IngestionResult<()> {
    T::try_from(count)
        .map(|_| ())
        .map_err(|_| IngestionError::TooLarge { what, count })
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::empty()
    }
}
