//! Graph-construction and solver error types.

use thiserror::Error;

use sr_core::{GeoPoint, NodeId};

/// Reasons a raw node/edge set is rejected by [`GraphStore::build`].
///
/// Every variant names the offending node or edge so an operator can find it
/// in the feed.  A rejected build never produces a partial graph.
///
/// [`GraphStore::build`]: crate::GraphStore::build
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestionError {
    /// More nodes or edges than a graph version can address.
    #[error("{count} {what} exceed the per-version limit of u32 slots")]
    TooLarge { what: &'static str, count: usize },

    #[error("node {0} is declared more than once")]
    DuplicateNode(NodeId),

    #[error("node {id} has an invalid coordinate {pos}")]
    InvalidCoordinate { id: NodeId, pos: GeoPoint },

    #[error("edge {from} -> {to} references undeclared node {missing}")]
    DanglingEdge { from: NodeId, to: NodeId, missing: NodeId },

    #[error("edge {from} -> {to} has invalid weight {weight} (must be finite and >= 0)")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

/// Errors produced by a [`PathSolver`](crate::PathSolver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No path exists.  A normal outcome on networks with disconnected
    /// components, not a fault.
    #[error("no route from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type IngestionResult<T> = Result<T, IngestionError>;
pub type SolverResult<T> = Result<T, SolverError>;
