//! Path-solver trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The engine calls shortest-path search through the [`PathSolver`] trait, so
//! applications can swap in A*, contraction hierarchies or a test double
//! without touching the ingestion or query code.  [`DijkstraSolver`] is the
//! default.
//!
//! # Cost units
//!
//! Costs are whatever unit the feed's edge weights use (metres for road
//! lengths).  The solver only requires them to be finite and non-negative,
//! which [`GraphStore::build`] guarantees.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use sr_core::{NodeId, NodeIdx};

use crate::{GraphStore, SolverError, SolverResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a successful search: node ids from source to target and the
/// summed edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Nodes in travel order, source first, target last.  Never empty.
    pub nodes: Vec<NodeId>,
    /// Sum of the weights of the traversed edges.
    pub total_weight: f64,
}

impl Path {
    /// `true` if the source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
}

// ── PathSolver trait ──────────────────────────────────────────────────────────

/// Pluggable single-pair shortest-path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one solver instance serves every
/// concurrent query of an engine.
pub trait PathSolver: Send + Sync {
    /// Lowest-cost path from `from` to `to` in `store`.
    ///
    /// `from == to` yields a single-node path of cost 0.  A missing path is
    /// [`SolverError::Unreachable`]; an id absent from `store` is
    /// [`SolverError::NodeNotFound`].
    fn shortest_path(&self, store: &GraphStore, from: NodeId, to: NodeId) -> SolverResult<Path>;
}

// ── DijkstraSolver ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR graph with a binary-heap frontier.
///
/// - Relaxation is strict: a node's predecessor only changes when a strictly
///   cheaper candidate appears, so equal-cost alternatives keep the first one
///   discovered.
/// - The search stops the moment the target is **popped** (its distance is
///   final), not when it is first reached.
///
/// O((V + E) log V).
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSolver;

impl PathSolver for DijkstraSolver {
    fn shortest_path(&self, store: &GraphStore, from: NodeId, to: NodeId) -> SolverResult<Path> {
        let source = store.idx_of(from).ok_or(SolverError::NodeNotFound(from))?;
        let target = store.idx_of(to).ok_or(SolverError::NodeNotFound(to))?;
        dijkstra(store, source, target).ok_or(SolverError::Unreachable { from, to })
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(store: &GraphStore, source: NodeIdx, target: NodeIdx) -> Option<Path> {
    if source == target {
        return Some(Path { nodes: vec![store.id_at(source)], total_weight: 0.0 });
    }

    let n = store.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = node that reached v; NodeIdx::INVALID for unreached nodes.
    let mut prev = vec![NodeIdx::INVALID; n];

    dist[source.index()] = 0.0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeIdx ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeIdx)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(cost), node))) = heap.pop() {
        if node == target {
            return Some(reconstruct(store, &prev, source, target, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in store.out_edges(node) {
            let neighbor = store.edge_to(edge);
            let candidate = cost + store.edge_weight_at(edge);

            if candidate < dist[neighbor.index()] {
                dist[neighbor.index()] = candidate;
                prev[neighbor.index()] = node;
                heap.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }

    None
}

fn reconstruct(
    store: &GraphStore,
    prev: &[NodeIdx],
    source: NodeIdx,
    target: NodeIdx,
    total_weight: f64,
) -> Path {
    let mut nodes = vec![store.id_at(target)];
    let mut cur = target;
    while cur != source {
        cur = prev[cur.index()];
        nodes.push(store.id_at(cur));
    }
    nodes.reverse();
    Path { nodes, total_weight }
}
