//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tunables for a [`RouteEngine`](crate::RouteEngine).
///
/// Typically deserialized from the host application's own config file and
/// passed in; the engine never reads the environment itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Endpoints farther than this many metres from every road node are
    /// treated as unresolved and produce an empty route.  `None` snaps to the
    /// nearest node at any distance.
    pub max_snap_distance_m: Option<f64>,
}

impl EngineConfig {
    pub fn with_max_snap_distance_m(mut self, metres: f64) -> Self {
        self.max_snap_distance_m = Some(metres);
        self
    }
}
