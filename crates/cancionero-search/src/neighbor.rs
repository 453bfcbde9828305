use std::fmt;
use std::num::NonZero;

use kiddo::{ImmutableKdTree, SquaredEuclidean};

use cancionero_core::model::{SongIndex, FEATURE_COUNT};
use cancionero_core::{Error, Projection, Result};

/// Upper bound on neighbors returned by one query, the query song included.
pub const MAX_NEIGHBORS: usize = 6;

/// A song found near a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: SongIndex,
    /// Euclidean distance to the query point.
    pub distance: f64,
}

/// Exact Euclidean nearest-neighbor index over one partition of the catalog.
///
/// Points are held in an immutable k-d tree whose items are build
/// positions; `members` maps each position back to its catalog index.
/// Never mutated after construction.
pub struct NeighborIndex {
    tree: Option<ImmutableKdTree<f64, FEATURE_COUNT>>,
    members: Vec<SongIndex>,
    k: usize,
}

impl fmt::Debug for NeighborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeighborIndex")
            .field("members", &self.members.len())
            .field("k", &self.k)
            .finish_non_exhaustive()
    }
}

impl NeighborIndex {
    /// Build an index over projected feature rows.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if a row does not have exactly
    /// [`FEATURE_COUNT`] values.
    pub fn build(rows: &[Projection]) -> Result<Self> {
        let mut points: Vec<[f64; FEATURE_COUNT]> = Vec::with_capacity(rows.len());
        let mut members = Vec::with_capacity(rows.len());

        for row in rows {
            let coords: [f64; FEATURE_COUNT] = row.values.as_slice().try_into().map_err(|_| {
                Error::InvalidArgument(format!(
                    "song {} has {} feature values, expected {FEATURE_COUNT}",
                    row.index,
                    row.values.len()
                ))
            })?;
            points.push(coords);
            members.push(row.index);
        }

        let tree = (!points.is_empty()).then(|| ImmutableKdTree::new_from_slice(&points));

        Ok(Self {
            tree,
            k: MAX_NEIGHBORS.min(members.len()),
            members,
        })
    }

    /// Number of neighbors a query returns.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Catalog indices covered by this index, in build order.
    #[must_use]
    pub fn members(&self) -> &[SongIndex] {
        &self.members
    }

    /// The `k` nearest members to `query`, closest first. Equal distances
    /// keep build order.
    #[must_use]
    pub fn query(&self, query: &[f64; FEATURE_COUNT]) -> Vec<Neighbor> {
        let (Some(tree), Some(qty)) = (&self.tree, NonZero::new(self.k)) else {
            return Vec::new();
        };

        let nearest = tree.nearest_n::<SquaredEuclidean>(query, qty);
        let Some(cutoff) = nearest.iter().map(|n| n.distance).max_by(f64::total_cmp) else {
            return Vec::new();
        };

        // The tree picks arbitrarily among points tied at the cutoff, so
        // gather every point up to it and order ties by position.
        let radius = cutoff + f64::EPSILON.max(cutoff * 1e-9);
        let mut candidates: Vec<(f64, usize)> = tree
            .within::<SquaredEuclidean>(query, radius)
            .into_iter()
            .filter(|n| n.distance <= cutoff)
            .filter_map(|n| usize::try_from(n.item).ok().map(|position| (n.distance, position)))
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        candidates.truncate(self.k);

        candidates
            .into_iter()
            .map(|(squared, position)| Neighbor {
                index: self.members[position],
                distance: squared.sqrt(),
            })
            .collect()
    }
}
