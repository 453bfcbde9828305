use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $inner:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    SongIndex,
    usize,
    "Zero-based row position of a song in the loaded catalog."
);
define_id!(
    ClusterId,
    i64,
    "Externally computed cluster label partitioning the neighbor search space."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_index_roundtrip() {
        let index = SongIndex::new(12);
        assert_eq!(index.get(), 12);
        assert_eq!(SongIndex::from(12), index);
    }

    #[test]
    fn test_cluster_id_display() {
        assert_eq!(ClusterId::new(-3).to_string(), "-3");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&SongIndex::new(5)).unwrap();
        assert_eq!(json, "5");
        let cluster: ClusterId = serde_json::from_str("7").unwrap();
        assert_eq!(cluster, ClusterId::new(7));
    }
}
