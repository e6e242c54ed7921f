//! Route query facade: coordinates in, coordinates out.
//!
//! ```text
//! origin, destination ──nearest──▶ NodeIds ──PathSolver──▶ Path ──positions──▶ [Coordinate]
//! ```
//!
//! Unresolvable endpoints and unreachable targets are ordinary outcomes and
//! both become an empty route; the caller never has to tell them apart.

use log::debug;
use serde::{Deserialize, Serialize};

use sr_core::{Coordinate, GeoPoint, NodeId};
use sr_network::{Path, PathSolver, SolverError};

use crate::{EngineConfig, Snapshot};

// ── Wire types ────────────────────────────────────────────────────────────────

/// Body of a route query: `{origin: {lat, lng}, destination: {lat, lng}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin:      Coordinate,
    pub destination: Coordinate,
}

impl RouteRequest {
    pub fn new(origin: GeoPoint, destination: GeoPoint) -> Self {
        Self { origin, destination }
    }
}

/// Ordered waypoints, `[{lat, lng}, ...]`.  Empty when no route exists.
pub type RouteResponse = Vec<Coordinate>;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// What happened to a single query, before it is flattened to a response.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(Path),
    /// Origin or destination has no road node (empty graph, or farther than
    /// the configured snap distance).
    EndpointUnresolved,
    /// Both endpoints resolved but no path connects them.
    Unreachable,
}

// ── Facade ────────────────────────────────────────────────────────────────────

/// Resolve both endpoints against `snapshot` and search for a path.
pub fn plan<S: PathSolver + ?Sized>(
    snapshot: &Snapshot,
    solver: &S,
    config: &EngineConfig,
    origin: Coordinate,
    destination: Coordinate,
) -> RouteOutcome {
    let (Some(from), Some(to)) = (
        resolve(snapshot, config, origin),
        resolve(snapshot, config, destination),
    ) else {
        return RouteOutcome::EndpointUnresolved;
    };

    match solver.shortest_path(snapshot.store(), from, to) {
        Ok(path) => RouteOutcome::Found(path),
        Err(SolverError::Unreachable { .. }) => RouteOutcome::Unreachable,
        // Ids come from this snapshot's own index, so this means the solver
        // disagrees with the store about membership.
        Err(SolverError::NodeNotFound(_)) => RouteOutcome::EndpointUnresolved,
    }
}

/// The coordinate sequence for a query, or an empty sequence when there is
/// no route.
pub fn find_route<S: PathSolver + ?Sized>(
    snapshot: &Snapshot,
    solver: &S,
    config: &EngineConfig,
    origin: Coordinate,
    destination: Coordinate,
) -> RouteResponse {
    let outcome = plan(snapshot, solver, config, origin, destination);
    match outcome {
        RouteOutcome::Found(path) => {
            debug!(
                "v{}: route {origin} -> {destination}: {} nodes, weight {}",
                snapshot.version(),
                path.len(),
                path.total_weight,
            );
            to_coordinates(snapshot, &path)
        }
        other => {
            debug!("v{}: no route {origin} -> {destination}: {other:?}", snapshot.version());
            Vec::new()
        }
    }
}

/// Nearest node for `pos`; `None` for an invalid coordinate or when nothing
/// lies within the configured snap radius.
fn resolve(snapshot: &Snapshot, config: &EngineConfig, pos: Coordinate) -> Option<NodeId> {
    if !pos.is_valid() {
        return None;
    }
    match config.max_snap_distance_m {
        Some(limit) => snapshot.index().nearest_within(pos, limit),
        None => snapshot.index().nearest(pos),
    }
}

fn to_coordinates(snapshot: &Snapshot, path: &Path) -> RouteResponse {
    path.nodes
        .iter()
        .filter_map(|&id| snapshot.store().position(id))
        .collect()
}
