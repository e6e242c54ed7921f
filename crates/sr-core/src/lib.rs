//! `sr-core`: foundational types for the `smart-route` routing engine.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`ids`]   | `NodeId` (stable), `NodeIdx`, `EdgeIdx` (dense slots)  |
//! | [`geo`]   | `GeoPoint`, haversine distance, unit-sphere projection |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use ids::{EdgeIdx, NodeId, NodeIdx};

/// A client-facing waypoint.  Same shape as [`GeoPoint`] (`{lat, lng}`).
pub type Coordinate = GeoPoint;
