//! Raw road-network feed: record types and CSV loader.
//!
//! # CSV format
//!
//! Two files, one row per node and one row per road segment.
//!
//! ```csv
//! id,lat,lng
//! 240001,19.0330,73.0297
//! 240002,19.0341,73.0311
//! ```
//!
//! ```csv
//! from,to,length,oneway
//! 240001,240002,182.4,false
//! 240002,240001,,
//! ```
//!
//! | Column   | Meaning                                                    |
//! |----------|------------------------------------------------------------|
//! | `length` | Edge weight.  Empty or missing column → `1.0`.             |
//! | `oneway` | `false` adds the reverse direction too.  Empty or missing → `true`. |
//!
//! Rows are parsed only; referential integrity and weight checks happen when
//! the records are ingested.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use sr_network::{Edge, Node};

use crate::{EngineError, EngineResult};

/// Weight assumed for an edge whose feed record carries no length.
pub const DEFAULT_EDGE_LENGTH: f64 = 1.0;

// ── Records ───────────────────────────────────────────────────────────────────

/// One node as delivered by the feed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id:  u64,
    pub lat: f64,
    pub lng: f64,
}

/// One road segment as delivered by the feed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    pub from: u64,
    pub to:   u64,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub oneway: Option<bool>,
}

impl RawNode {
    pub fn new(id: u64, lat: f64, lng: f64) -> Self {
        Self { id, lat, lng }
    }
}

impl RawEdge {
    /// A one-way segment of the given length.
    pub fn new(from: u64, to: u64, length: f64) -> Self {
        Self { from, to, length: Some(length), oneway: None }
    }

    /// A segment traversable in both directions.
    pub fn two_way(from: u64, to: u64, length: f64) -> Self {
        Self { from, to, length: Some(length), oneway: Some(false) }
    }

    pub fn weight(&self) -> f64 {
        self.length.unwrap_or(DEFAULT_EDGE_LENGTH)
    }

    pub fn is_oneway(&self) -> bool {
        self.oneway.unwrap_or(true)
    }
}

/// Convert feed records into graph-build inputs, expanding two-way segments
/// into both directions.
pub fn to_graph_input(nodes: Vec<RawNode>, edges: Vec<RawEdge>) -> (Vec<Node>, Vec<Edge>) {
    let nodes = nodes
        .into_iter()
        .map(|n| Node::new(n.id, n.lat, n.lng))
        .collect();

    let mut graph_edges = Vec::with_capacity(edges.len() * 2);
    for e in edges {
        if e.is_oneway() {
            graph_edges.push(Edge::new(e.from, e.to, e.weight()));
        } else {
            graph_edges.extend(Edge::road_pair(e.from, e.to, e.weight()));
        }
    }
    (nodes, graph_edges)
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load node records from a CSV file with an `id,lat,lng` header.
pub fn load_nodes_csv(path: &Path) -> EngineResult<Vec<RawNode>> {
    let file = std::fs::File::open(path).map_err(EngineError::Io)?;
    load_nodes_reader(file)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_nodes_reader<R: Read>(reader: R) -> EngineResult<Vec<RawNode>> {
    read_records(reader)
}

/// Load edge records from a CSV file with a `from,to[,length][,oneway]` header.
pub fn load_edges_csv(path: &Path) -> EngineResult<Vec<RawEdge>> {
    let file = std::fs::File::open(path).map_err(EngineError::Io)?;
    load_edges_reader(file)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R) -> EngineResult<Vec<RawEdge>> {
    read_records(reader)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> EngineResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| EngineError::Feed(e.to_string())))
        .collect()
}
