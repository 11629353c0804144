//! Scene sinks that live outside a visualization host.
//!
//! [`RecordingSink`] keeps batches in memory for inspection;
//! [`bild::BildScene`] renders them to the BILD text format.

pub mod bild;

use std::collections::BTreeMap;

use crate::host::ResidueId;
use crate::scene::{Batch, SceneKey, SceneSink};

/// In-memory [`SceneSink`] recording the current scene contents.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    batches: BTreeMap<SceneKey, Batch>,
    visibility: BTreeMap<ResidueId, bool>,
    inserts: usize,
    removals: usize,
}

impl RecordingSink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch stored under `key`.
    #[must_use]
    pub fn get(&self, key: SceneKey) -> Option<&Batch> {
        self.batches.get(&key)
    }

    /// Current batches ordered by key.
    pub fn batches(&self) -> impl Iterator<Item = (&SceneKey, &Batch)> {
        self.batches.iter()
    }

    /// Current keys ordered.
    #[must_use]
    pub fn keys(&self) -> Vec<SceneKey> {
        self.batches.keys().copied().collect()
    }

    /// Batches belonging to `residue`.
    pub fn batches_for(
        &self,
        residue: ResidueId,
    ) -> impl Iterator<Item = (&SceneKey, &Batch)> {
        self.batches.iter().filter(move |(_, b)| b.residue == residue)
    }

    /// Number of batches currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Whether the scene is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Last visibility set for `residue`.
    #[must_use]
    pub fn residue_visible(&self, residue: ResidueId) -> Option<bool> {
        self.visibility.get(&residue).copied()
    }

    /// Total insert calls received.
    #[must_use]
    pub fn insert_count(&self) -> usize {
        self.inserts
    }

    /// Total remove calls received.
    #[must_use]
    pub fn remove_count(&self) -> usize {
        self.removals
    }
}

impl SceneSink for RecordingSink {
    fn insert(&mut self, key: SceneKey, batch: Batch) {
        self.inserts += 1;
        if self.batches.insert(key, batch).is_some() {
            log::debug!("replaced scene batch {key}");
        }
    }

    fn remove(&mut self, key: SceneKey) {
        self.removals += 1;
        let _ = self.batches.remove(&key);
    }

    fn set_residue_visible(&mut self, residue: ResidueId, visible: bool) {
        let _ = self.visibility.insert(residue, visible);
    }
}
