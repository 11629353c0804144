//! Draw interface towards the host scene.

use std::fmt;

use glam::DVec3;

use super::SessionId;
use crate::geometry::Primitive;
use crate::host::ResidueId;
use crate::symbol::Color;

/// Sub-object slot of a glyph's primitive batches.
pub mod subid {
    /// The glyph shape.
    pub const SHAPE: u32 = 0;
    /// The connector.
    pub const CONNECTOR: u32 = 1;
    /// The bond-type label marker (connector subid + 1).
    pub const LABEL: u32 = 2;
}

/// Identity of a primitive batch in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneKey {
    /// Owning session.
    pub session: SessionId,
    /// Glyph id (starts at 100 per enable cycle).
    pub id: u32,
    /// Sub-object slot, see [`subid`].
    pub subid: u32,
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}.{}", self.session.0, self.id, self.subid)
    }
}

/// Text attached to a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Anchor position.
    pub position: DVec3,
    /// Text colour.
    pub color: Color,
}

/// A named, coloured set of primitives inserted as one scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Display name (`"SNFG N-Acetylglucosamine"`, `"SNFG connector
    /// terminal"`, ...).
    pub name: String,
    /// Residue the batch belongs to.
    pub residue: ResidueId,
    /// Primitives.
    pub primitives: Vec<Primitive>,
    /// Optional label.
    pub label: Option<Label>,
}

/// Receives scene mutations from sessions.
pub trait SceneSink {
    /// Insert (or replace) the batch stored under `key`.
    fn insert(&mut self, key: SceneKey, batch: Batch);

    /// Remove the batch stored under `key`. Unknown keys are ignored.
    fn remove(&mut self, key: SceneKey);

    /// Show or hide the atoms of `residue`.
    fn set_residue_visible(&mut self, residue: ResidueId, visible: bool) {
        let _ = (residue, visible);
    }
}
