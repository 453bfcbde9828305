//! Nearest-neighbor search for cancionero.
//!
//! Builds exact Euclidean k-d tree indices over the normalized audio features of each
//! cluster on first use and keeps them for the lifetime of the catalog.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod cache;
pub mod neighbor;

pub use cache::{ClusterIndexCache, MIN_PARTITION_SIZE};
pub use neighbor::{Neighbor, NeighborIndex, MAX_NEIGHBORS};
