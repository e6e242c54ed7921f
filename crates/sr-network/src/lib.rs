//! `sr-network`: road graph, nearest-node index, and shortest-path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`store`]  | `GraphStore` (validated CSR graph), `Node`, `Edge`           |
//! | [`index`]  | `SpatialIndex` (haversine R-tree), `linear_nearest`          |
//! | [`solver`] | `PathSolver` trait, `Path`, `DijkstraSolver`                 |
//! | [`error`]  | `IngestionError`, `SolverError`, result aliases              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Node` and `Edge`.      |

pub mod error;
pub mod index;
pub mod solver;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{IngestionError, IngestionResult, SolverError, SolverResult};
pub use index::{SpatialIndex, linear_nearest};
pub use solver::{DijkstraSolver, Path, PathSolver};
pub use store::{Edge, GraphStore, Node};
