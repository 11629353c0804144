//! Per-session glyph lifecycle.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::events::{
    Channel, ChangeEvent, ChangeNotifier, ChangeReason, SubscriptionToken,
};
use super::glyph::{Glyph, GlyphIdAllocator};
use super::sink::{subid, Batch, Label, SceneSink};
use super::SessionId;
use crate::error::SnfgError;
use crate::host::{MoleculeId, ResidueId, StructureHost};
use crate::linkage::{self, ConnectorStyle};
use crate::ring::{self, Detection};
use crate::symbol::Color;

/// Drawing parameters of one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Base glyph size before the per-shape scale.
    pub base_size: f64,
    /// Whether connectors are drawn.
    pub connect: bool,
    /// Connector cylinder radius.
    pub cylinder_radius: f64,
    /// Cylinder reduction factor for reducing-end and cap connectors.
    pub cylinder_redfac: f64,
    /// End-sphere reduction factor for reducing-end and cap connectors.
    pub sphere_redfac: f64,
    /// Whether the atoms of classified residues are hidden.
    pub hide_residue: bool,
    /// Whether inter-glyph connectors get a bond-type label.
    pub bondtypes: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            base_size: 4.0,
            connect: true,
            cylinder_radius: 0.5,
            cylinder_redfac: 0.0,
            sphere_redfac: 0.0,
            hide_residue: false,
            bondtypes: false,
        }
    }
}

impl SessionSettings {
    /// Connector radii derived from these settings.
    #[must_use]
    pub fn connector_style(&self) -> ConnectorStyle {
        ConnectorStyle {
            base_size: self.base_size,
            cylinder_radius: self.cylinder_radius,
            cylinder_redfac: self.cylinder_redfac,
            sphere_redfac: self.sphere_redfac,
        }
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing drawn, no subscriptions.
    Disabled,
    /// Glyphs drawn and change notifications subscribed.
    Enabled,
}

/// Glyphs and connectors for a fixed set of molecules.
///
/// A session draws every classified sugar ring of its molecules, redraws
/// them from scratch when their coordinates change, and drops single glyphs
/// when their residue is deleted.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    settings: SessionSettings,
    molecules: Vec<MoleculeId>,
    state: SessionState,
    glyphs: BTreeMap<ResidueId, Glyph>,
    problematic: Vec<ResidueId>,
    ambiguous: Vec<ResidueId>,
    subscriptions: Vec<SubscriptionToken>,
    ids: GlyphIdAllocator,
}

impl Session {
    /// Disabled session over `molecules`.
    #[must_use]
    pub fn new(
        id: SessionId,
        settings: SessionSettings,
        molecules: Vec<MoleculeId>,
    ) -> Self {
        Self {
            id,
            settings,
            molecules,
            state: SessionState::Disabled,
            glyphs: BTreeMap::new(),
            problematic: Vec::new(),
            ambiguous: Vec::new(),
            subscriptions: Vec::new(),
            ids: GlyphIdAllocator::default(),
        }
    }

    // -- Lifecycle --

    /// Detect and draw all glyphs, then subscribe to change notifications.
    ///
    /// Any previous state is torn down first, so enabling twice yields the
    /// same scene as enabling once. Residues whose glyph or connector cannot
    /// be built are logged and skipped; a missing alpha carbon on an
    /// N-linked attachment or an exhausted id space aborts the whole build
    /// and leaves the session disabled.
    pub fn enable(
        &mut self,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
        notifier: &mut dyn ChangeNotifier,
    ) -> Result<(), SnfgError> {
        self.disable(sink, notifier);
        self.redraw(host, sink)?;

        for channel in [Channel::Structure, Channel::Residue] {
            self.subscriptions.push(notifier.subscribe(channel, self.id));
        }
        self.state = SessionState::Enabled;
        self.report_problematic(host);
        log::info!(
            "{}: {} glyphs over {} molecules",
            self.id,
            self.glyphs.len(),
            self.molecules.len()
        );
        Ok(())
    }

    /// Remove every glyph and connector, release the subscriptions and
    /// reset the glyph ids. Disabling a disabled session does nothing.
    pub fn disable(
        &mut self,
        sink: &mut dyn SceneSink,
        notifier: &mut dyn ChangeNotifier,
    ) {
        let was_enabled = self.state == SessionState::Enabled;
        self.teardown(sink);
        for token in self.subscriptions.drain(..) {
            let _ = notifier.unsubscribe(token);
        }
        self.problematic.clear();
        self.ambiguous.clear();
        self.ids.reset();
        self.state = SessionState::Disabled;
        if was_enabled {
            log::info!("{}: disabled", self.id);
        }
    }

    /// React to a published change.
    ///
    /// A coordinate change touching one of the session's molecules redraws
    /// everything; a residue deletion drops only the affected glyphs.
    pub fn handle(
        &mut self,
        event: &ChangeEvent,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
    ) -> Result<(), SnfgError> {
        if self.state != SessionState::Enabled {
            return Ok(());
        }
        match event {
            ChangeEvent::Structure { modified, reasons } => {
                let tracked = modified.iter().any(|m| self.molecules.contains(m));
                if tracked
                    && reasons.contains(&ChangeReason::CoordinatesChanged)
                {
                    log::debug!("{}: coordinates changed, redrawing", self.id);
                    self.redraw(host, sink)?;
                }
            }
            ChangeEvent::Residue { deleted, .. } => {
                for &residue in deleted {
                    self.remove_residue(residue, sink);
                }
            }
        }
        Ok(())
    }

    /// Push this session's residue visibility to the host again, after
    /// another session touched the same residues.
    pub fn apply_visibility(&self, sink: &mut dyn SceneSink) {
        if self.state != SessionState::Enabled {
            return;
        }
        for &residue in self.glyphs.keys() {
            sink.set_residue_visible(residue, !self.settings.hide_residue);
        }
    }

    // -- Accessors --

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state == SessionState::Enabled
    }

    /// Drawing parameters.
    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Tracked molecules.
    #[must_use]
    pub fn molecules(&self) -> &[MoleculeId] {
        &self.molecules
    }

    /// Whether `molecule` belongs to this session.
    #[must_use]
    pub fn tracks(&self, molecule: MoleculeId) -> bool {
        self.molecules.contains(&molecule)
    }

    /// Drawn glyphs, ordered by residue.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    /// Glyph of `residue`.
    #[must_use]
    pub fn glyph(&self, residue: ResidueId) -> Option<&Glyph> {
        self.glyphs.get(&residue)
    }

    /// Number of drawn glyphs.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Known carbohydrate residues with misnamed ring atoms, each once.
    #[must_use]
    pub fn problematic_residues(&self) -> &[ResidueId] {
        &self.problematic
    }

    /// Residues with a sugar ring but an unknown residue code.
    #[must_use]
    pub fn ambiguous_residues(&self) -> &[ResidueId] {
        &self.ambiguous
    }

    /// Number of live change subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    // -- Internals --

    /// Tear down, detect again and draw.
    fn redraw(
        &mut self,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
    ) -> Result<(), SnfgError> {
        self.teardown(sink);
        let detection = ring::detect(host, &self.molecules);
        self.problematic.clone_from(&detection.problematic);
        self.ambiguous.clone_from(&detection.ambiguous);

        // Connectors read glyph centers, so every glyph is built first.
        let mut drawn = self.draw_glyphs(host, sink, &detection);
        if drawn.is_ok() && self.settings.connect {
            drawn = self.draw_connectors(host, sink, &detection);
        }
        if let Err(e) = drawn {
            log::error!("{}: build aborted: {e}", self.id);
            self.teardown(sink);
            return Err(e);
        }
        log::debug!(
            "{}: drew {} of {} rings",
            self.id,
            self.glyphs.len(),
            detection.rings.len()
        );
        Ok(())
    }

    fn draw_glyphs(
        &mut self,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
        detection: &Detection,
    ) -> Result<(), SnfgError> {
        for ring in &detection.rings {
            let Some(residue_type) = ring.residue_type() else {
                continue;
            };
            let id = self.ids.allocate()?;
            let (glyph, primitives) = match Glyph::build(
                host,
                ring,
                residue_type,
                self.settings.base_size,
                id,
            ) {
                Ok(built) => built,
                Err(e) if e.aborts_rebuild() => return Err(e),
                Err(e) => {
                    log::warn!("{}: skipping {}: {e}", self.id, ring.residue);
                    continue;
                }
            };
            sink.insert(
                glyph.key(self.id, subid::SHAPE),
                Batch {
                    name: glyph.name(),
                    residue: ring.residue,
                    primitives,
                    label: None,
                },
            );
            sink.set_residue_visible(ring.residue, !self.settings.hide_residue);
            let _ = self.glyphs.insert(ring.residue, glyph);
        }
        Ok(())
    }

    fn draw_connectors(
        &mut self,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
        detection: &Detection,
    ) -> Result<(), SnfgError> {
        let centers: FxHashMap<ResidueId, _> = self
            .glyphs
            .iter()
            .map(|(&residue, glyph)| (residue, glyph.center()))
            .collect();
        let style = self.settings.connector_style();

        for ring in &detection.rings {
            let Some(&center) = centers.get(&ring.residue) else {
                continue;
            };
            let connector =
                match linkage::resolve(host, ring, center, &centers, &style) {
                    Ok(connector) => connector,
                    Err(e) if e.aborts_rebuild() => return Err(e),
                    Err(e) => {
                        log::warn!(
                            "{}: no connector for {}: {e}",
                            self.id,
                            ring.residue
                        );
                        continue;
                    }
                };
            let Some(glyph) = self.glyphs.get_mut(&ring.residue) else {
                continue;
            };

            sink.insert(
                glyph.key(self.id, subid::CONNECTOR),
                Batch {
                    name: format!("SNFG connector {}", connector.kind),
                    residue: ring.residue,
                    primitives: connector.primitives(),
                    label: None,
                },
            );
            if self.settings.bondtypes {
                if let Some(marker) = connector.label_marker() {
                    sink.insert(
                        glyph.key(self.id, subid::LABEL),
                        Batch {
                            name: format!("SNFG label {}", connector.kind),
                            residue: ring.residue,
                            primitives: marker.primitives,
                            label: Some(Label {
                                text: marker.text,
                                position: marker.position,
                                color: Color::Black,
                            }),
                        },
                    );
                    glyph.labelled = true;
                }
            }
            glyph.connector = Some(connector);
        }
        Ok(())
    }

    /// Remove every batch and forget all glyphs.
    fn teardown(&mut self, sink: &mut dyn SceneSink) {
        for glyph in std::mem::take(&mut self.glyphs).into_values() {
            self.remove_glyph(&glyph, sink);
        }
    }

    fn remove_glyph(&self, glyph: &Glyph, sink: &mut dyn SceneSink) {
        for key in glyph.keys(self.id) {
            sink.remove(key);
        }
        if self.settings.hide_residue {
            sink.set_residue_visible(glyph.residue, true);
        }
    }

    fn remove_residue(&mut self, residue: ResidueId, sink: &mut dyn SceneSink) {
        if let Some(glyph) = self.glyphs.remove(&residue) {
            for key in glyph.keys(self.id) {
                sink.remove(key);
            }
            log::debug!("{}: dropped glyph of deleted {residue}", self.id);
        }
        self.problematic.retain(|&r| r != residue);
        self.ambiguous.retain(|&r| r != residue);
    }

    fn report_problematic(&self, host: &dyn StructureHost) {
        if self.problematic.is_empty() {
            return;
        }
        log::warn!(
            "{}: detected {} carbohydrate residues with potentially wrong \
             atom names",
            self.id,
            self.problematic.len()
        );
        for &residue in &self.problematic {
            log::warn!(
                "{residue} ({}) might be a carbohydrate with wrong atom names",
                host.residue_type(residue).unwrap_or("?")
            );
        }
    }
}
