//! `sr-engine`: versioned ingestion and route queries for smart-route.
//!
//! # Life of a version
//!
//! ```text
//! feed (RawNode, RawEdge) ─▶ GraphStore::build ─▶ SpatialIndex::build ─▶ Snapshot vN
//!                                                                           │
//!                               ActiveVersion: swap Arc (vN-1 → vN) ◀───────┘
//!
//! query: ActiveVersion::load ─▶ nearest(origin), nearest(destination)
//!                            ─▶ PathSolver::shortest_path ─▶ [Coordinate]
//! ```
//!
//! A failed ingestion never reaches the swap, so the previous version keeps
//! serving.  Queries already running finish on the version they loaded.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `route_batch` runs on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sr_engine::{EngineBuilder, RawEdge, RawNode};
//! use sr_core::GeoPoint;
//!
//! let engine = EngineBuilder::new()
//!     .feed(
//!         vec![RawNode::new(1, 19.03, 73.02), RawNode::new(2, 19.04, 73.03)],
//!         vec![RawEdge::two_way(1, 2, 1_450.0)],
//!     )
//!     .build()?;
//! let route = engine.find_route(GeoPoint::new(19.03, 73.02), GeoPoint::new(19.04, 73.03))?;
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod feed;
pub mod query;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::RouteEngine;
pub use error::{EngineError, EngineResult};
pub use feed::{RawEdge, RawNode, load_edges_csv, load_edges_reader, load_nodes_csv, load_nodes_reader};
pub use query::{RouteOutcome, RouteRequest, RouteResponse, find_route, plan};
pub use snapshot::{ActiveVersion, Snapshot};
