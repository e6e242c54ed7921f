//! Fluent builder for constructing a [`RouteEngine`].

use sr_network::{DijkstraSolver, PathSolver};

use crate::feed::{RawEdge, RawNode};
use crate::{EngineConfig, EngineResult, RouteEngine};

/// Fluent builder for [`RouteEngine<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                              |
/// |--------------------|--------------------------------------|
/// | `.config(c)`       | `EngineConfig::default()`            |
/// | `.solver(s)`       | `DijkstraSolver`                     |
/// | `.feed(nodes, e)`  | none: engine serves the empty graph  |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new()
///     .config(EngineConfig::default().with_max_snap_distance_m(500.0))
///     .feed(nodes, edges)
///     .build()?;
/// let route = engine.find_route(origin, destination)?;
/// ```
pub struct EngineBuilder<S: PathSolver = DijkstraSolver> {
    config: EngineConfig,
    solver: S,
    feed:   Option<(Vec<RawNode>, Vec<RawEdge>)>,
}

impl EngineBuilder<DijkstraSolver> {
    pub fn new() -> Self {
        Self { config: EngineConfig::default(), solver: DijkstraSolver, feed: None }
    }
}

impl Default for EngineBuilder<DijkstraSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PathSolver> EngineBuilder<S> {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the path solver (e.g. with a test double or a faster search).
    pub fn solver<T: PathSolver>(self, solver: T) -> EngineBuilder<T> {
        EngineBuilder { config: self.config, solver, feed: self.feed }
    }

    /// Supply the feed for the first version.
    ///
    /// If not called, the engine starts on the empty version 0 and every
    /// query returns an empty route until something is ingested.
    pub fn feed(mut self, nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> Self {
        self.feed = Some((nodes, edges));
        self
    }

    /// Create the engine and ingest the initial feed, if any.
    ///
    /// Fails with the feed's validation error; no engine is returned in that
    /// case.
    pub fn build(self) -> EngineResult<RouteEngine<S>> {
        let engine = RouteEngine::new(self.config, self.solver);
        if let Some((nodes, edges)) = self.feed {
            engine.ingest(nodes, edges)?;
        }
        Ok(engine)
    }
}
