//! Versioned graph snapshots and the active-version slot.
//!
//! # Swap protocol
//!
//! ```text
//! reader:  read-lock → clone Arc<Snapshot> → unlock → route on its own Arc
//! writer:  build Snapshot (no lock) → write-lock → replace Arc → unlock
//! ```
//!
//! The lock is held only for an `Arc` clone or pointer store, never across a
//! query or a build.  A reader keeps whichever version it cloned until it
//! drops the `Arc`; the last drop frees that version's store and index
//! together.

use std::sync::{Arc, RwLock};

use sr_network::{Edge, GraphStore, IngestionResult, Node, SpatialIndex};

use crate::{EngineError, EngineResult};

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// One immutable graph version: the store and the index built from it.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    store:   GraphStore,
    index:   SpatialIndex,
}

impl Snapshot {
    /// Version 0: no nodes, no edges.
    pub fn empty() -> Self {
        Self { version: 0, store: GraphStore::empty(), index: SpatialIndex::empty() }
    }

    /// Validate and build a store, then index it.  Nothing is constructed
    /// unless the whole input is valid.
    pub fn build(version: u64, nodes: Vec<Node>, edges: Vec<Edge>) -> IngestionResult<Self> {
        let store = GraphStore::build(nodes, edges)?;
        let index = SpatialIndex::build(&store);
        Ok(Self { version, store, index })
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }
}

// ── ActiveVersion ─────────────────────────────────────────────────────────────

/// The slot holding the snapshot currently being served.
#[derive(Debug)]
pub struct ActiveVersion {
    current: RwLock<Arc<Snapshot>>,
}

impl ActiveVersion {
    pub fn new(initial: Snapshot) -> Self {
        Self { current: RwLock::new(Arc::new(initial)) }
    }

    /// The snapshot being served right now.
    pub fn load(&self) -> EngineResult<Arc<Snapshot>> {
        self.current
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| poisoned())
    }

    /// Make `next` the served snapshot and return the one it replaced.
    pub fn publish(&self, next: Arc<Snapshot>) -> EngineResult<Arc<Snapshot>> {
        let mut guard = self.current.write().map_err(|_| poisoned())?;
        Ok(std::mem::replace(&mut *guard, next))
    }
}

fn poisoned() -> EngineError {
    EngineError::StoreUnavailable("active version lock poisoned".to_owned())
}
