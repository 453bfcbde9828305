use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::columns::Column;
use crate::catalog::load;
use crate::error::{Error, Result};
use crate::model::{ClusterId, SongIndex, SongRecord};

/// Selected numeric columns of one song, used to build search indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub index: SongIndex,
    pub values: Vec<f64>,
}

/// Immutable, process-lifetime table of song records.
///
/// Every record's `index` equals its row position; rows are never
/// renumbered or removed after construction.
#[derive(Debug)]
pub struct CatalogStore {
    source: Option<PathBuf>,
    songs: Vec<SongRecord>,
}

impl CatalogStore {
    /// Load the catalog from a CSV file.
    ///
    /// # Errors
    /// Fails with [`Error::DataLoad`] or [`Error::MissingColumns`] if the
    /// file is unreadable, lacks a required column, or holds no songs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let songs = load::read_csv(path)?;
        let store = Self {
            source: Some(path.to_path_buf()),
            songs,
        };
        log::info!(
            "Loaded {} songs in {} clusters from {}",
            store.len(),
            store.cluster_sizes().len(),
            path.display()
        );
        Ok(store)
    }

    /// Build a catalog from in-memory records, numbering them by position.
    pub fn from_records(records: Vec<SongRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::DataLoad {
                path: PathBuf::from("<memory>"),
                reason: "catalog contains no songs".to_string(),
            });
        }

        let songs = records
            .into_iter()
            .enumerate()
            .map(|(position, mut song)| {
                song.index = SongIndex::new(position);
                song
            })
            .collect();

        Ok(Self {
            source: None,
            songs,
        })
    }

    /// The file this catalog was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Look up a song by its catalog index.
    pub fn get(&self, index: SongIndex) -> Result<&SongRecord> {
        self.songs
            .get(index.get())
            .ok_or_else(|| Error::not_found("song", index.get()))
    }

    /// Every song in load order. Call again to restart.
    pub fn all(&self) -> std::slice::Iter<'_, SongRecord> {
        self.songs.iter()
    }

    /// Project the given columns out of the given songs, preserving the
    /// order of `indices`.
    pub fn project(&self, indices: &[SongIndex], columns: &[Column]) -> Result<Vec<Projection>> {
        indices
            .iter()
            .map(|&index| {
                let song = self.get(index)?;
                Ok(Projection {
                    index,
                    values: columns.iter().map(|column| column.value(song)).collect(),
                })
            })
            .collect()
    }

    /// Indices of every song in `cluster`, in catalog order.
    #[must_use]
    pub fn partition(&self, cluster: ClusterId) -> Vec<SongIndex> {
        self.songs
            .iter()
            .filter(|song| song.cluster == cluster)
            .map(|song| song.index)
            .collect()
    }

    /// Number of songs per cluster, ordered by cluster id.
    #[must_use]
    pub fn cluster_sizes(&self) -> BTreeMap<ClusterId, usize> {
        let mut sizes = BTreeMap::new();
        for song in &self.songs {
            *sizes.entry(song.cluster).or_insert(0) += 1;
        }
        sizes
    }
}
