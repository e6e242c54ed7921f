//! Strongly typed, zero-cost identifier wrappers.
//!
//! Two families of IDs live here:
//!
//! - [`NodeId`] is the **stable** identifier of a road node.  It comes from the
//!   raw feed (typically an OSM node id) and means the same node in every
//!   graph version that contains it.
//! - [`NodeIdx`] and [`EdgeIdx`] are **dense slot indices** into one graph
//!   version's arrays.  They are rebuilt by every ingestion and must never be
//!   stored outside the version that produced them.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

/// Add slot-index helpers to a dense ID generated by `typed_id!`.
macro_rules! dense_index {
    ($name:ident, $inner:ty) => {
        impl $name {
            /// Sentinel meaning "no valid slot" (the integer maximum).
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized slots are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Stable road-node identifier, assigned by the raw feed.
    pub struct NodeId(u64);
}

typed_id! {
    /// Dense position of a node inside one graph version.  Ordered like the
    /// `NodeId`s it stands for.
    pub struct NodeIdx(u32);
}

typed_id! {
    /// Dense position of a directed edge inside one graph version.
    pub struct EdgeIdx(u32);
}

dense_index!(NodeIdx, u32);
dense_index!(EdgeIdx, u32);
