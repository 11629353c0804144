//! Registry of live sessions.

use std::collections::BTreeMap;

use super::events::{ChangeEvent, EventBus};
use super::session::{Session, SessionSettings};
use super::sink::SceneSink;
use super::SessionId;
use crate::error::SnfgError;
use crate::host::{MoleculeId, StructureHost};

/// Owns every live [`Session`] and the [`EventBus`] they subscribe to.
///
/// Sessions are registered on creation and deregistered when removed, so
/// bulk operations such as [`SessionRegistry::disable_all`] only ever see
/// live sessions. Each session owns a disjoint molecule set: once a new
/// session over already tracked molecules is enabled, the older sessions
/// tracking them are retired.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: BTreeMap<SessionId, Session>,
    bus: EventBus,
    next_id: u32,
}

impl SessionRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create, enable and register a session.
    ///
    /// An empty `molecules` list means every molecule the host knows. The
    /// new session is enabled before any overlapping session is retired,
    /// so when enabling fails nothing is registered and the older sessions
    /// keep their glyphs.
    pub fn create(
        &mut self,
        settings: SessionSettings,
        molecules: Vec<MoleculeId>,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
    ) -> Result<SessionId, SnfgError> {
        let molecules = if molecules.is_empty() {
            host.molecules()
        } else {
            molecules
        };

        let overlapping: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|s| molecules.iter().any(|&m| s.tracks(m)))
            .map(Session::id)
            .collect();

        let id = SessionId(self.next_id);
        self.next_id += 1;
        let mut session = Session::new(id, settings, molecules);
        if let Err(e) = session.enable(host, sink, &mut self.bus) {
            // The aborted build may have reset visibility of shared residues.
            for old in &overlapping {
                if let Some(old) = self.sessions.get(old) {
                    old.apply_visibility(sink);
                }
            }
            if !overlapping.is_empty() {
                log::warn!(
                    "{id} failed to enable; keeping {} existing sessions",
                    overlapping.len()
                );
            }
            return Err(e);
        }

        for old in overlapping {
            if self.remove(old, sink) {
                log::debug!("{old} replaced by {id}");
            } else {
                log::warn!("{old} vanished before {id} could replace it");
            }
        }
        session.apply_visibility(sink);
        let _ = self.sessions.insert(id, session);
        Ok(id)
    }

    /// Registered session.
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Re-enable a registered session (full redraw).
    pub fn enable(
        &mut self,
        id: SessionId,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
    ) -> Result<(), SnfgError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| SnfgError::InvalidArgument(format!("no {id}")))?;
        session.enable(host, sink, &mut self.bus)
    }

    /// Disable a registered session without deregistering it.
    pub fn disable(&mut self, id: SessionId, sink: &mut dyn SceneSink) -> bool {
        match self.sessions.get_mut(&id) {
            Some(session) => {
                session.disable(sink, &mut self.bus);
                true
            }
            None => false,
        }
    }

    /// Disable and deregister a session.
    pub fn remove(&mut self, id: SessionId, sink: &mut dyn SceneSink) -> bool {
        match self.sessions.remove(&id) {
            Some(mut session) => {
                session.disable(sink, &mut self.bus);
                true
            }
            None => false,
        }
    }

    /// Disable and deregister every session. Returns how many were removed.
    pub fn disable_all(&mut self, sink: &mut dyn SceneSink) -> usize {
        let sessions = std::mem::take(&mut self.sessions);
        let count = sessions.len();
        for mut session in sessions.into_values() {
            session.disable(sink, &mut self.bus);
        }
        if count > 0 {
            log::info!("disabled {count} sessions");
        }
        count
    }

    /// Deliver `event` to every session subscribed to its channel.
    ///
    /// Sessions are independent: a failing session does not stop delivery
    /// to the others. Failures are returned per session.
    pub fn dispatch(
        &mut self,
        event: &ChangeEvent,
        host: &dyn StructureHost,
        sink: &mut dyn SceneSink,
    ) -> Vec<(SessionId, SnfgError)> {
        let mut failures = Vec::new();
        for id in self.bus.subscribers(event.channel()) {
            let Some(session) = self.sessions.get_mut(&id) else {
                continue;
            };
            if let Err(e) = session.handle(event, host, sink) {
                failures.push((id, e));
            }
        }
        failures
    }

    /// Registered sessions in creation order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }

    /// Number of registered sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Change-notification bus shared by the sessions.
    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::host::memory::MemoryStructure;
    use crate::host::Element;
    use crate::output::RecordingSink;

    const PYRANOSE: [&str; 6] = ["C1", "C2", "C3", "C4", "C5", "O5"];

    fn two_molecules() -> (MemoryStructure, MoleculeId, MoleculeId) {
        let mut s = MemoryStructure::new();
        let a = s.add_molecule("a");
        let b = s.add_molecule("b");
        let _ = s.add_ring_residue(a, "GAL", &PYRANOSE, DVec3::ZERO);
        let _ = s.add_ring_residue(b, "FUC", &PYRANOSE, DVec3::X * 20.0);
        (s, a, b)
    }

    #[test]
    fn sessions_are_independent() {
        let (s, a, b) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let first = registry
            .create(SessionSettings::default(), vec![a], &s, &mut sink)
            .unwrap();
        let small = SessionSettings {
            base_size: 1.6,
            connect: false,
            ..SessionSettings::default()
        };
        let second = registry.create(small, vec![b], &s, &mut sink).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(sink.len(), 3);

        assert!(registry.remove(first, &mut sink));
        assert_eq!(sink.len(), 1);
        let remaining = registry.get(second).unwrap();
        assert!(remaining.is_enabled());
        assert_eq!(remaining.glyph_count(), 1);
        assert_eq!(registry.bus().len(), 2);
    }

    #[test]
    fn overlapping_session_replaces_the_older_one() {
        let (s, a, _) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let old = registry
            .create(SessionSettings::default(), vec![a], &s, &mut sink)
            .unwrap();
        let new = registry
            .create(SessionSettings::default(), vec![a], &s, &mut sink)
            .unwrap();
        assert_ne!(old, new);
        assert!(registry.get(old).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn failed_replacement_keeps_the_older_session() {
        let mut s = MemoryStructure::new();
        let a = s.add_molecule("a");
        let (gal, ring) = s.add_ring_residue(a, "GAL", &PYRANOSE, DVec3::ZERO);
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let hidden = SessionSettings {
            hide_residue: true,
            ..SessionSettings::default()
        };
        let old = registry.create(hidden, vec![a], &s, &mut sink).unwrap();
        assert_eq!(sink.len(), 2);

        // Amide cap bonded through N with no alpha carbon.
        let cap = s.add_residue(a, "NH2", false);
        let n = s.add_atom(cap, "N", Element::N, DVec3::new(2.8, 0.0, 0.0));
        s.add_bond(ring[0], n);

        let err = registry
            .create(hidden, vec![a], &s, &mut sink)
            .unwrap_err();
        assert!(matches!(err, SnfgError::MissingAlphaCarbon { .. }));
        assert_eq!(registry.len(), 1);
        let kept = registry.get(old).unwrap();
        assert!(kept.is_enabled());
        assert_eq!(kept.glyph_count(), 1);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.residue_visible(gal), Some(false));
        assert_eq!(registry.bus().len(), 2);
    }

    #[test]
    fn replacement_reapplies_visibility() {
        let (s, a, _) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let hidden = SessionSettings {
            hide_residue: true,
            ..SessionSettings::default()
        };
        let _ = registry.create(hidden, vec![a], &s, &mut sink).unwrap();
        let new = registry.create(hidden, vec![a], &s, &mut sink).unwrap();
        let residue = registry.get(new).unwrap().glyphs().next().unwrap().residue;
        assert_eq!(sink.residue_visible(residue), Some(false));
    }

    #[test]
    fn empty_molecule_list_tracks_everything() {
        let (s, a, b) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let id = registry
            .create(SessionSettings::default(), Vec::new(), &s, &mut sink)
            .unwrap();
        assert_eq!(registry.get(id).unwrap().molecules(), &[a, b]);
    }

    #[test]
    fn disable_all_clears_scene_and_registry() {
        let (s, a, b) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        for mol in [a, b] {
            let _ = registry
                .create(SessionSettings::default(), vec![mol], &s, &mut sink)
                .unwrap();
        }
        assert_eq!(registry.disable_all(&mut sink), 2);
        assert!(registry.is_empty());
        assert!(sink.is_empty());
        assert!(registry.bus().is_empty());
        assert_eq!(registry.disable_all(&mut sink), 0);
    }

    #[test]
    fn dispatch_routes_to_subscribers() {
        let (mut s, a, b) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let first = registry
            .create(SessionSettings::default(), vec![a], &s, &mut sink)
            .unwrap();
        let second = registry
            .create(SessionSettings::default(), vec![b], &s, &mut sink)
            .unwrap();
        let center_of = |registry: &SessionRegistry, id| {
            registry.get(id).unwrap().glyphs().next().unwrap().center()
        };
        let before_a = center_of(&registry, first);
        let before_b = center_of(&registry, second);

        s.translate_molecule(a, DVec3::Y);
        let failures = registry.dispatch(
            &ChangeEvent::coordinates_changed(vec![a]),
            &s,
            &mut sink,
        );
        assert!(failures.is_empty());
        assert!((center_of(&registry, first) - (before_a + DVec3::Y)).length() < 1e-9);
        assert_eq!(center_of(&registry, second), before_b);
    }

    #[test]
    fn disabled_session_stays_registered() {
        let (s, a, _) = two_molecules();
        let mut sink = RecordingSink::new();
        let mut registry = SessionRegistry::new();
        let id = registry
            .create(SessionSettings::default(), vec![a], &s, &mut sink)
            .unwrap();
        assert!(registry.disable(id, &mut sink));
        assert!(!registry.get(id).unwrap().is_enabled());
        registry.enable(id, &s, &mut sink).unwrap();
        assert!(registry.get(id).unwrap().is_enabled());
        assert!(registry.enable(SessionId(99), &s, &mut sink).is_err());
    }
}
