//! Glyphs owned by a session and their identity allocator.

use glam::DVec3;

use super::sink::{subid, SceneKey};
use super::SessionId;
use crate::error::SnfgError;
use crate::geometry::{self, GlyphSpec, Primitive};
use crate::host::{atom_view, AtomView, MoleculeId, ResidueId, StructureHost};
use crate::linkage::Connector;
use crate::residue::ResidueType;
use crate::ring::DetectedRing;

/// First glyph id handed out after every reset.
pub const BASE_GLYPH_ID: u32 = 100;

/// Monotonic glyph id counter, reset to [`BASE_GLYPH_ID`] when its session
/// is disabled. Redraws keep counting; the counter never wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphIdAllocator {
    next: u32,
}

impl Default for GlyphIdAllocator {
    fn default() -> Self {
        Self {
            next: BASE_GLYPH_ID,
        }
    }
}

impl GlyphIdAllocator {
    /// Hand out the next id, failing once the id space is used up.
    pub fn allocate(&mut self) -> Result<u32, SnfgError> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(SnfgError::GlyphIdsExhausted)?;
        Ok(id)
    }

    /// Id the next [`GlyphIdAllocator::allocate`] call returns.
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Start over at [`BASE_GLYPH_ID`].
    pub fn reset(&mut self) {
        self.next = BASE_GLYPH_ID;
    }
}

/// One classified sugar residue drawn in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Glyph id, namespacing its scene batches.
    pub id: u32,
    /// Residue the glyph stands for.
    pub residue: ResidueId,
    /// Molecule owning the residue.
    pub molecule: MoleculeId,
    /// Canonical residue type.
    pub residue_type: &'static ResidueType,
    /// Layout the shape was built from.
    pub spec: GlyphSpec,
    /// Anchor atom coordinate.
    pub anchor: DVec3,
    /// Resolved connector, when connectors are drawn.
    pub connector: Option<Connector>,
    /// Whether a label marker batch was emitted.
    pub labelled: bool,
}

impl Glyph {
    /// Lay out the glyph for `ring`.
    ///
    /// The glyph faces its anchor atom and is rolled by the ring oxygen.
    /// Returns the glyph and its shape primitives.
    pub fn build<H: StructureHost + ?Sized>(
        host: &H,
        ring: &DetectedRing,
        residue_type: &'static ResidueType,
        base_size: f64,
        id: u32,
    ) -> Result<(Self, Vec<Primitive>), SnfgError> {
        let atoms: Vec<AtomView<'_>> = ring
            .atoms
            .iter()
            .map(|&atom| atom_view(host, atom))
            .collect::<Result<_, _>>()?;
        let center = geometry::ring_center(&atoms)?;
        let anchor = atom_view(host, ring.anchor)?.coord;
        let reference = atom_view(host, ring.ring_oxygen)?.coord;

        let spec = GlyphSpec::for_residue(
            residue_type,
            base_size,
            center,
            anchor,
            reference,
        );
        let primitives = geometry::build(&spec)?;
        Ok((
            Self {
                id,
                residue: ring.residue,
                molecule: ring.molecule,
                residue_type,
                spec,
                anchor,
                connector: None,
                labelled: false,
            },
            primitives,
        ))
    }

    /// Glyph center.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.spec.center
    }

    /// Scene key of one of the glyph's batches.
    #[must_use]
    pub fn key(&self, session: SessionId, slot: u32) -> SceneKey {
        SceneKey {
            session,
            id: self.id,
            subid: slot,
        }
    }

    /// Keys of every batch the glyph put into the scene.
    #[must_use]
    pub fn keys(&self, session: SessionId) -> Vec<SceneKey> {
        let mut keys = vec![self.key(session, subid::SHAPE)];
        if self.connector.is_some() {
            keys.push(self.key(session, subid::CONNECTOR));
        }
        if self.labelled {
            keys.push(self.key(session, subid::LABEL));
        }
        keys
    }

    /// Scene name of the shape batch.
    #[must_use]
    pub fn name(&self) -> String {
        format!("SNFG {}", self.residue_type.name)
    }
}
