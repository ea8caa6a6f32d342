//! Favorite instruments, persisted as a JSON array of instrument ids.
//!
//! Ids are opaque: an id whose instrument no longer exists is kept on disk
//! and simply skipped by [`FavoritesStore::resolve`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use scorexpress_instruments::Instrument;
use scorexpress_instruments::catalog::Catalog;

use crate::config::write_atomic;

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    ids: Vec<String>,
}

impl FavoritesStore {
    /// Load favorites from `path`. A missing or unreadable file starts an
    /// empty list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "favorites file is corrupt, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no favorites file yet");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read favorites, starting empty");
                Vec::new()
            }
        };

        Self { path, ids }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Favorite ids in the order they were added.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_favorite(&self, instrument_id: &str) -> bool {
        self.ids.iter().any(|id| id == instrument_id)
    }

    /// Add or remove `instrument_id` and persist. Returns whether it is a
    /// favorite afterwards. On a write failure the list is left unchanged.
    pub fn toggle(&mut self, instrument_id: &str) -> eyre::Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = match next.iter().position(|id| id == instrument_id) {
            Some(index) => {
                next.remove(index);
                false
            }
            None => {
                next.push(instrument_id.to_string());
                true
            }
        };

        let json = serde_json::to_string_pretty(&next)?;
        write_atomic(&self.path, json.as_bytes())?;
        self.ids = next;

        debug!(instrument_id, favorite = now_favorite, "favorites updated");
        Ok(now_favorite)
    }

    /// Favorite instruments present in `catalog`, in favorites order.
    pub fn resolve(&self, catalog: &Catalog) -> Vec<Arc<Instrument>> {
        self.ids.iter().filter_map(|id| catalog.get(id)).collect()
    }
}
