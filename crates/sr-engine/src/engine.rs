//! The `RouteEngine` handle: ingestion and queries against one active version.

use std::path::Path as FsPath;
use std::sync::{Arc, Mutex};

use log::{info, warn};

use sr_core::Coordinate;
use sr_network::{DijkstraSolver, Edge, Node, PathSolver};

use crate::feed::{self, RawEdge, RawNode};
use crate::query::{self, RouteRequest, RouteResponse};
use crate::snapshot::{ActiveVersion, Snapshot};
use crate::{EngineConfig, EngineError, EngineResult};

/// A routing engine instance.
///
/// Holds the active graph version, the solver and the configuration.  There
/// is no global instance: create one (directly or via
/// [`EngineBuilder`](crate::EngineBuilder)), wrap it in an `Arc` and share it
/// between request handlers.  Any number of threads may query while another
/// thread ingests.
pub struct RouteEngine<S: PathSolver = DijkstraSolver> {
    config: EngineConfig,
    solver: S,
    active: ActiveVersion,
    /// Serializes writers; readers never touch it.
    ingest_lock: Mutex<()>,
}

impl RouteEngine<DijkstraSolver> {
    /// An engine with the default config and solver, serving an empty graph.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default(), DijkstraSolver)
    }
}

impl<S: PathSolver> RouteEngine<S> {
    /// An engine serving the empty version 0 until the first ingestion.
    pub fn new(config: EngineConfig, solver: S) -> Self {
        Self {
            config,
            solver,
            active: ActiveVersion::new(Snapshot::empty()),
            ingest_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Build a new version from feed records and make it active.
    ///
    /// On error the currently active version keeps serving, untouched.
    pub fn ingest(&self, nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> EngineResult<Arc<Snapshot>> {
        let (nodes, edges) = feed::to_graph_input(nodes, edges);
        self.ingest_graph(nodes, edges)
    }

    /// Load a node CSV and an edge CSV and ingest them.
    pub fn ingest_csv(&self, nodes_path: &FsPath, edges_path: &FsPath) -> EngineResult<Arc<Snapshot>> {
        let nodes = feed::load_nodes_csv(nodes_path)?;
        let edges = feed::load_edges_csv(edges_path)?;
        self.ingest(nodes, edges)
    }

    /// Like [`ingest`](Self::ingest) but takes already-directed graph input.
    pub fn ingest_graph(&self, nodes: Vec<Node>, edges: Vec<Edge>) -> EngineResult<Arc<Snapshot>> {
        let _writer = self
            .ingest_lock
            .lock()
            .map_err(|_| EngineError::StoreUnavailable("ingestion lock poisoned".to_owned()))?;

        let version = self.active.load()?.version() + 1;
        let (node_count, edge_count) = (nodes.len(), edges.len());

        let snapshot = match Snapshot::build(version, nodes, edges) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                warn!("v{version}: ingestion of {node_count} nodes / {edge_count} edges rejected: {e}");
                return Err(e.into());
            }
        };

        let previous = self.active.publish(Arc::clone(&snapshot))?;
        info!(
            "published v{version} ({} nodes, {} edges), replacing v{}",
            snapshot.store().node_count(),
            snapshot.store().edge_count(),
            previous.version(),
        );
        Ok(snapshot)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The version currently being served.  Holding the returned `Arc` keeps
    /// that version alive regardless of later ingestions.
    pub fn snapshot(&self) -> EngineResult<Arc<Snapshot>> {
        self.active.load()
    }

    pub fn version(&self) -> EngineResult<u64> {
        Ok(self.active.load()?.version())
    }

    /// Ordered waypoints from `origin` to `destination`; empty when either
    /// endpoint is unresolved or no path exists.
    pub fn find_route(&self, origin: Coordinate, destination: Coordinate) -> EngineResult<RouteResponse> {
        let snapshot = self.active.load()?;
        Ok(query::find_route(&snapshot, &self.solver, &self.config, origin, destination))
    }

    pub fn route(&self, request: &RouteRequest) -> EngineResult<RouteResponse> {
        self.find_route(request.origin, request.destination)
    }

    /// Answer several requests against one snapshot.  Responses are in
    /// request order.
    pub fn route_batch(&self, requests: &[RouteRequest]) -> EngineResult<Vec<RouteResponse>> {
        let snapshot = self.active.load()?;
        let answer = |r: &RouteRequest| {
            query::find_route(&snapshot, &self.solver, &self.config, r.origin, r.destination)
        };

        #[cfg(feature = "parallel")]
        let responses = {
            use rayon::prelude::*;
            requests.par_iter().map(answer).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let responses = requests.iter().map(answer).collect();

        Ok(responses)
    }
}

impl Default for RouteEngine<DijkstraSolver> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
