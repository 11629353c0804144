//! Carbohydrate ring detection.
//!
//! Scans the minimal rings of each tracked molecule and keeps those that
//! look like sugar rings: at most six atoms, owned by a ligand residue, and
//! named with the canonical ring-atom names. Rings that fail the naming
//! check while their residue code is a known carbohydrate are reported as
//! problematic so naming-convention mismatches can be spotted.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::host::{
    atom_view, AtomId, AtomView, MoleculeId, ResidueId, StructureHost,
};
use crate::residue::{self, ResidueType};

/// Largest ring considered a sugar ring.
pub const MAX_RING_SIZE: usize = 6;

/// Ring-atom names of pyranose/furanose rings.
pub const RING_ATOM_NAMES: [&str; 7] =
    ["C1", "C2", "C3", "C4", "C5", "O5", "O6"];

// ---------------------------------------------------------------------------
// RingShift
// ---------------------------------------------------------------------------

/// Numbering offset of a ring.
///
/// Most sugars close their ring at C1 (`C1..C5, O5`). Sialic acids and other
/// ulosonic acids close at C2 (`C2..C6, O6`), shifting every ring position
/// by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingShift {
    /// Ring starts at C1.
    Standard,
    /// Ring starts at C2.
    Sialic,
}

impl RingShift {
    /// Derive the shift from the lexicographically smallest ring-atom name.
    #[must_use]
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        match names.into_iter().min() {
            Some("C2") => Self::Sialic,
            _ => Self::Standard,
        }
    }

    /// Name of the anchor atom (first ring carbon).
    #[must_use]
    pub fn anchor_name(self) -> &'static str {
        match self {
            Self::Standard => "C1",
            Self::Sialic => "C2",
        }
    }

    /// Name of the ring oxygen (last ring member).
    #[must_use]
    pub fn ring_oxygen_name(self) -> &'static str {
        match self {
            Self::Standard => "O5",
            Self::Sialic => "O6",
        }
    }

    /// Whether `name` is a valid ring-atom name under this shift.
    #[must_use]
    pub fn accepts(self, name: &str) -> bool {
        RING_ATOM_NAMES.contains(&name)
            || (self == Self::Sialic && name == "C6")
    }
}

// ---------------------------------------------------------------------------
// Detection results
// ---------------------------------------------------------------------------

/// Outcome of looking a ring's residue code up in the residue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The residue code resolves to a canonical residue type.
    Known(&'static ResidueType),
    /// The ring looks like a sugar but its residue code is not in the table.
    Unrecognized,
}

/// A sugar ring found in a molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedRing {
    /// Molecule the ring belongs to.
    pub molecule: MoleculeId,
    /// Residue owning the ring.
    pub residue: ResidueId,
    /// Ring atoms, ordered along the cycle.
    pub atoms: Vec<AtomId>,
    /// Ring numbering offset.
    pub shift: RingShift,
    /// First ring carbon (C1, or C2 for sialic acids).
    pub anchor: AtomId,
    /// Ring oxygen (O5, or O6 for sialic acids).
    pub ring_oxygen: AtomId,
    /// Residue table lookup result.
    pub classification: Classification,
}

impl DetectedRing {
    /// Canonical residue type, when the ring classified.
    #[must_use]
    pub fn residue_type(&self) -> Option<&'static ResidueType> {
        match self.classification {
            Classification::Known(t) => Some(t),
            Classification::Unrecognized => None,
        }
    }
}

/// Everything one detection pass found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detection {
    /// Accepted rings in molecule order, at most one per residue.
    pub rings: Vec<DetectedRing>,
    /// Known carbohydrate residues whose ring atoms are misnamed. Each
    /// residue appears once.
    pub problematic: Vec<ResidueId>,
    /// Residues with a valid ring whose code is not in the residue table.
    pub ambiguous: Vec<ResidueId>,
}

impl Detection {
    /// Ring detected for `residue`.
    #[must_use]
    pub fn ring_for(&self, residue: ResidueId) -> Option<&DetectedRing> {
        self.rings.iter().find(|r| r.residue == residue)
    }

    /// Accepted rings grouped by molecule. Molecules without rings are
    /// absent.
    #[must_use]
    pub fn by_molecule(&self) -> BTreeMap<MoleculeId, Vec<&DetectedRing>> {
        let mut map: BTreeMap<MoleculeId, Vec<&DetectedRing>> =
            BTreeMap::new();
        for ring in &self.rings {
            map.entry(ring.molecule).or_default().push(ring);
        }
        map
    }

    /// Rings that classified to a known residue type.
    pub fn classified(&self) -> impl Iterator<Item = &DetectedRing> {
        self.rings
            .iter()
            .filter(|r| matches!(r.classification, Classification::Known(_)))
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Verdict on a single minimal ring.
enum RingVerdict {
    /// Not a ring of interest.
    Ignore,
    /// Known carbohydrate residue with misnamed ring atoms.
    Problematic(ResidueId),
    /// Accepted sugar ring.
    Accept(DetectedRing),
}

/// Detect sugar rings in `molecules`.
pub fn detect<H: StructureHost + ?Sized>(
    host: &H,
    molecules: &[MoleculeId],
) -> Detection {
    let mut detection = Detection::default();
    let mut claimed: FxHashSet<ResidueId> = FxHashSet::default();
    let mut flagged: FxHashSet<ResidueId> = FxHashSet::default();
    let mut ambiguous: FxHashSet<ResidueId> = FxHashSet::default();

    for &molecule in molecules {
        let mut found = 0usize;
        for ring in host.minimum_rings(molecule) {
            match inspect_ring(host, molecule, &ring) {
                RingVerdict::Ignore => {}
                RingVerdict::Problematic(residue) => {
                    if flagged.insert(residue) {
                        detection.problematic.push(residue);
                    }
                }
                RingVerdict::Accept(detected) => {
                    if !claimed.insert(detected.residue) {
                        log::debug!(
                            "{} already has a sugar ring; ignoring another",
                            detected.residue
                        );
                        continue;
                    }
                    if detected.classification == Classification::Unrecognized
                        && ambiguous.insert(detected.residue)
                    {
                        log::warn!(
                            "{} ({}) has a sugar ring but an unknown \
                             residue code",
                            detected.residue,
                            host.residue_type(detected.residue).unwrap_or("?")
                        );
                        detection.ambiguous.push(detected.residue);
                    }
                    found += 1;
                    detection.rings.push(detected);
                }
            }
        }
        if found == 0 {
            log::debug!("{molecule}: no sugar rings");
        } else {
            log::debug!("{molecule}: {found} sugar rings");
        }
    }

    // A residue with one valid ring is not problematic because of another.
    detection.problematic.retain(|r| !claimed.contains(r));

    detection
}

fn inspect_ring<H: StructureHost + ?Sized>(
    host: &H,
    molecule: MoleculeId,
    ring: &[AtomId],
) -> RingVerdict {
    if ring.is_empty() || ring.len() > MAX_RING_SIZE {
        return RingVerdict::Ignore;
    }
    let views: Vec<AtomView<'_>> = match ring
        .iter()
        .map(|&atom| atom_view(host, atom))
        .collect::<Result<_, _>>()
    {
        Ok(views) => views,
        Err(e) => {
            log::debug!("skipping ring in {molecule}: {e}");
            return RingVerdict::Ignore;
        }
    };

    let residue = views[0].residue;
    if !host.is_ligand(residue) {
        return RingVerdict::Ignore;
    }

    let shift = RingShift::from_names(views.iter().map(|v| v.name));
    let named = views.iter().all(|v| shift.accepts(v.name));
    let find = |name: &str| views.iter().find(|v| v.name == name).map(|v| v.id);
    let anchor = find(shift.anchor_name());
    let ring_oxygen = find(shift.ring_oxygen_name());

    let code = host.residue_type(residue).unwrap_or_default();
    match (named, anchor, ring_oxygen) {
        (true, Some(anchor), Some(ring_oxygen)) => {
            let classification = residue::classify(code)
                .map_or(Classification::Unrecognized, Classification::Known);
            RingVerdict::Accept(DetectedRing {
                molecule,
                residue,
                atoms: ring.to_vec(),
                shift,
                anchor,
                ring_oxygen,
                classification,
            })
        }
        _ if residue::table().contains(code) => {
            RingVerdict::Problematic(residue)
        }
        _ => RingVerdict::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::host::memory::MemoryStructure;
    use crate::host::Element;
    use crate::symbol::{Color, Shape};

    fn sugar(
        s: &mut MemoryStructure,
        mol: MoleculeId,
        code: &str,
        names: &[&str],
        ligand: bool,
    ) -> ResidueId {
        let res = s.add_residue(mol, code, ligand);
        let atoms: Vec<AtomId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let angle = i as f64 * std::f64::consts::TAU / names.len() as f64;
                let element = if name.starts_with('O') {
                    Element::O
                } else {
                    Element::C
                };
                s.add_atom(
                    res,
                    name,
                    element,
                    DVec3::new(angle.cos(), angle.sin(), 0.0) * 1.4,
                )
            })
            .collect();
        for i in 0..atoms.len() {
            s.add_bond(atoms[i], atoms[(i + 1) % atoms.len()]);
        }
        res
    }

    const PYRANOSE: [&str; 6] = ["C1", "C2", "C3", "C4", "C5", "O5"];

    #[test]
    fn mannose_ring_classifies() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let res = sugar(&mut s, mol, "MAN", &PYRANOSE, true);
        let detection = detect(&s, &[mol]);
        assert_eq!(detection.rings.len(), 1);
        let ring = &detection.rings[0];
        assert_eq!(ring.residue, res);
        assert_eq!(ring.shift, RingShift::Standard);
        let t = ring.residue_type().unwrap();
        assert_eq!(t.id, "Man");
        assert_eq!(t.shape, Shape::Sphere);
        assert_eq!(t.color1, Color::Green);
        assert_eq!(s.atom_name(ring.anchor), Some("C1"));
        assert_eq!(s.atom_name(ring.ring_oxygen), Some("O5"));
        assert!(detection.problematic.is_empty());
    }

    #[test]
    fn misnamed_known_residue_is_problematic_once() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let res = sugar(
            &mut s,
            mol,
            "NAG",
            &["C1", "C2", "C3", "C4", "C5", "X"],
            true,
        );
        let detection = detect(&s, &[mol]);
        assert!(detection.rings.is_empty());
        assert_eq!(detection.problematic, vec![res]);
    }

    #[test]
    fn misnamed_unknown_residue_is_ignored() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let _ = sugar(
            &mut s,
            mol,
            "BNZ",
            &["C1", "C2", "C3", "C4", "C5", "C6"],
            true,
        );
        let detection = detect(&s, &[mol]);
        assert!(detection.rings.is_empty());
        assert!(detection.problematic.is_empty());
    }

    #[test]
    fn non_ligand_rings_are_ignored() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let _ = sugar(&mut s, mol, "MAN", &PYRANOSE, false);
        assert_eq!(detect(&s, &[mol]), Detection::default());
    }

    #[test]
    fn seven_membered_rings_are_ignored() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let _ = sugar(
            &mut s,
            mol,
            "MAN",
            &["C1", "C2", "C3", "C4", "C5", "O5", "O6"],
            true,
        );
        let detection = detect(&s, &[mol]);
        assert!(detection.rings.is_empty());
        assert!(detection.problematic.is_empty());
    }

    #[test]
    fn sialic_ring_is_shifted() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let _ = sugar(
            &mut s,
            mol,
            "SIA",
            &["C2", "C3", "C4", "C5", "C6", "O6"],
            true,
        );
        let detection = detect(&s, &[mol]);
        let ring = &detection.rings[0];
        assert_eq!(ring.shift, RingShift::Sialic);
        assert_eq!(s.atom_name(ring.anchor), Some("C2"));
        assert_eq!(s.atom_name(ring.ring_oxygen), Some("O6"));
        assert_eq!(ring.residue_type().unwrap().id, "Neu5Ac");
    }

    #[test]
    fn unknown_code_with_valid_ring_is_ambiguous() {
        let mut s = MemoryStructure::new();
        let mol = s.add_molecule("m");
        let res = sugar(&mut s, mol, "ZZZ", &PYRANOSE, true);
        let detection = detect(&s, &[mol]);
        assert_eq!(detection.rings.len(), 1);
        assert_eq!(detection.rings[0].classification, Classification::Unrecognized);
        assert_eq!(detection.ambiguous, vec![res]);
        assert_eq!(detection.classified().count(), 0);
    }

    #[test]
    fn molecules_without_rings_are_skipped() {
        let mut s = MemoryStructure::new();
        let empty = s.add_molecule("empty");
        let mol = s.add_molecule("m");
        let _ = sugar(&mut s, mol, "GLC", &PYRANOSE, true);
        let detection = detect(&s, &[empty, mol]);
        let grouped = detection.by_molecule();
        assert!(!grouped.contains_key(&empty));
        assert_eq!(grouped[&mol].len(), 1);
    }

    #[test]
    fn shift_from_names() {
        assert_eq!(RingShift::from_names(PYRANOSE), RingShift::Standard);
        assert_eq!(
            RingShift::from_names(["C3", "C2", "O6"]),
            RingShift::Sialic
        );
        assert!(RingShift::Sialic.accepts("C6"));
        assert!(!RingShift::Standard.accepts("C6"));
    }
}
