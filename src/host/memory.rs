//! In-memory structure host.
//!
//! Holds molecules, residues, atoms and bonds in flat id-keyed maps and
//! perceives minimal rings on demand. Structures can be assembled with the
//! builder methods or loaded from a JSON structure file.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use glam::DVec3;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::{AtomId, Element, MoleculeId, ResidueId, StructureHost};
use crate::error::SnfgError;

/// Largest ring reported by [`MemoryStructure::minimum_rings`].
const MAX_RING_SIZE: usize = 8;

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

/// Serialized structure: a list of molecules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StructureFile {
    /// Molecules in file order.
    pub molecules: Vec<MoleculeFile>,
}

/// Serialized molecule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MoleculeFile {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Residues in file order.
    pub residues: Vec<ResidueFile>,
    /// Bonds as pairs of atom indices, counted across all residues of
    /// this molecule in file order.
    #[serde(default)]
    pub bonds: Vec<[usize; 2]>,
}

/// Serialized residue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResidueFile {
    /// Residue type code.
    #[serde(rename = "type")]
    pub type_code: String,
    /// Whether the host's ligand selection includes this residue.
    #[serde(default)]
    pub ligand: bool,
    /// Atoms in file order.
    pub atoms: Vec<AtomFile>,
}

/// Serialized atom.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtomFile {
    /// Atom name.
    pub name: String,
    /// Element symbol.
    pub element: String,
    /// Cartesian coordinate.
    pub coord: [f64; 3],
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct AtomRecord {
    name: String,
    element: Element,
    coord: DVec3,
    residue: ResidueId,
    neighbors: Vec<AtomId>,
}

#[derive(Debug, Clone)]
struct ResidueRecord {
    type_code: String,
    ligand: bool,
    molecule: MoleculeId,
    atoms: Vec<AtomId>,
}

#[derive(Debug, Clone)]
struct MoleculeRecord {
    name: String,
    residues: Vec<ResidueId>,
    bonds: Vec<(AtomId, AtomId)>,
}

// ---------------------------------------------------------------------------
// MemoryStructure
// ---------------------------------------------------------------------------

/// Self-contained [`StructureHost`] implementation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStructure {
    molecules: BTreeMap<MoleculeId, MoleculeRecord>,
    residues: BTreeMap<ResidueId, ResidueRecord>,
    atoms: BTreeMap<AtomId, AtomRecord>,
    next_molecule: u32,
    next_residue: u32,
    next_atom: u32,
}

impl MemoryStructure {
    /// Create an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON structure file.
    pub fn from_json(json: &str) -> Result<Self, SnfgError> {
        let file: StructureFile = serde_json::from_str(json)
            .map_err(|e| SnfgError::StructureParse(e.to_string()))?;
        Self::from_file(&file)
    }

    /// Build from an already deserialized [`StructureFile`].
    pub fn from_file(file: &StructureFile) -> Result<Self, SnfgError> {
        let mut structure = Self::new();
        for mol in &file.molecules {
            let molecule = structure.add_molecule(&mol.name);
            let mut atom_ids = Vec::new();
            for res in &mol.residues {
                let residue =
                    structure.add_residue(molecule, &res.type_code, res.ligand);
                for atom in &res.atoms {
                    atom_ids.push(structure.add_atom(
                        residue,
                        &atom.name,
                        Element::from_symbol(&atom.element),
                        DVec3::from_array(atom.coord),
                    ));
                }
            }
            for &[a, b] in &mol.bonds {
                let (Some(&a), Some(&b)) = (atom_ids.get(a), atom_ids.get(b))
                else {
                    return Err(SnfgError::StructureParse(format!(
                        "bond [{a}, {b}] in molecule '{}' references a \
                         missing atom",
                        mol.name
                    )));
                };
                structure.add_bond(a, b);
            }
        }
        Ok(structure)
    }

    /// Add an empty molecule.
    pub fn add_molecule(&mut self, name: &str) -> MoleculeId {
        let id = MoleculeId(self.next_molecule);
        self.next_molecule += 1;
        let _ = self.molecules.insert(
            id,
            MoleculeRecord {
                name: name.to_owned(),
                residues: Vec::new(),
                bonds: Vec::new(),
            },
        );
        id
    }

    /// Add an empty residue to `molecule`.
    pub fn add_residue(
        &mut self,
        molecule: MoleculeId,
        type_code: &str,
        ligand: bool,
    ) -> ResidueId {
        let id = ResidueId(self.next_residue);
        self.next_residue += 1;
        let _ = self.residues.insert(
            id,
            ResidueRecord {
                type_code: type_code.to_owned(),
                ligand,
                molecule,
                atoms: Vec::new(),
            },
        );
        if let Some(mol) = self.molecules.get_mut(&molecule) {
            mol.residues.push(id);
        }
        id
    }

    /// Add an atom to `residue`.
    pub fn add_atom(
        &mut self,
        residue: ResidueId,
        name: &str,
        element: Element,
        coord: DVec3,
    ) -> AtomId {
        let id = AtomId(self.next_atom);
        self.next_atom += 1;
        let _ = self.atoms.insert(
            id,
            AtomRecord {
                name: name.to_owned(),
                element,
                coord,
                residue,
                neighbors: Vec::new(),
            },
        );
        if let Some(res) = self.residues.get_mut(&residue) {
            res.atoms.push(id);
        }
        id
    }

    /// Bond two atoms. Duplicate bonds and self-bonds are ignored.
    pub fn add_bond(&mut self, a: AtomId, b: AtomId) {
        if a == b {
            return;
        }
        let Some(molecule) = self.atom_residue(a).and_then(|r| {
            self.residues.get(&r).map(|record| record.molecule)
        }) else {
            return;
        };
        let already = self
            .atoms
            .get(&a)
            .is_some_and(|record| record.neighbors.contains(&b));
        if already || !self.atoms.contains_key(&b) {
            return;
        }
        if let Some(record) = self.atoms.get_mut(&a) {
            record.neighbors.push(b);
        }
        if let Some(record) = self.atoms.get_mut(&b) {
            record.neighbors.push(a);
        }
        if let Some(mol) = self.molecules.get_mut(&molecule) {
            mol.bonds.push((a, b));
        }
    }

    /// Add a residue whose atoms form a closed ring, laid out as a regular
    /// polygon of circumradius 1.4 in the xy plane around `origin`.
    ///
    /// Elements are taken from the first letter of each atom name. Returns
    /// the residue and its atoms in `names` order.
    pub fn add_ring_residue(
        &mut self,
        molecule: MoleculeId,
        type_code: &str,
        names: &[&str],
        origin: DVec3,
    ) -> (ResidueId, Vec<AtomId>) {
        let residue = self.add_residue(molecule, type_code, true);
        let step = std::f64::consts::TAU / names.len().max(1) as f64;
        let atoms: Vec<AtomId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let angle = i as f64 * step;
                let element = Element::from_symbol(name.get(..1).unwrap_or(""));
                let offset = DVec3::new(angle.cos(), angle.sin(), 0.0) * 1.4;
                self.add_atom(residue, name, element, origin + offset)
            })
            .collect();
        for (i, &atom) in atoms.iter().enumerate() {
            self.add_bond(atom, atoms[(i + 1) % atoms.len()]);
        }
        (residue, atoms)
    }

    /// Move an atom.
    pub fn set_atom_coord(&mut self, atom: AtomId, coord: DVec3) {
        if let Some(record) = self.atoms.get_mut(&atom) {
            record.coord = coord;
        }
    }

    /// Translate every atom of a molecule.
    pub fn translate_molecule(&mut self, molecule: MoleculeId, offset: DVec3) {
        let atoms: Vec<AtomId> = self
            .residues
            .values()
            .filter(|r| r.molecule == molecule)
            .flat_map(|r| r.atoms.iter().copied())
            .collect();
        for atom in atoms {
            if let Some(record) = self.atoms.get_mut(&atom) {
                record.coord += offset;
            }
        }
    }

    /// Delete a residue together with its atoms and their bonds.
    pub fn delete_residue(&mut self, residue: ResidueId) -> bool {
        let Some(record) = self.residues.remove(&residue) else {
            return false;
        };
        let doomed: FxHashSet<AtomId> = record.atoms.iter().copied().collect();
        for atom in &record.atoms {
            let _ = self.atoms.remove(atom);
        }
        for atom in self.atoms.values_mut() {
            atom.neighbors.retain(|n| !doomed.contains(n));
        }
        if let Some(mol) = self.molecules.get_mut(&record.molecule) {
            mol.residues.retain(|&r| r != residue);
            mol.bonds
                .retain(|(a, b)| !doomed.contains(a) && !doomed.contains(b));
        }
        true
    }

    /// Molecule display name.
    #[must_use]
    pub fn molecule_name(&self, molecule: MoleculeId) -> Option<&str> {
        self.molecules.get(&molecule).map(|m| m.name.as_str())
    }

    /// Residues of a molecule in insertion order.
    #[must_use]
    pub fn molecule_residues(&self, molecule: MoleculeId) -> &[ResidueId] {
        self.molecules
            .get(&molecule)
            .map_or(&[], |m| m.residues.as_slice())
    }

    /// Shortest path from `from` to `to` that does not use the direct
    /// `from`-`to` bond, limited to `MAX_RING_SIZE` atoms.
    fn shortest_detour(&self, from: AtomId, to: AtomId) -> Option<Vec<AtomId>> {
        let mut parent: FxHashMap<AtomId, AtomId> = FxHashMap::default();
        let mut depth: FxHashMap<AtomId, usize> = FxHashMap::default();
        let mut queue = VecDeque::new();
        let _ = depth.insert(from, 1);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            let current_depth = depth.get(&current).copied().unwrap_or(0);
            if current_depth >= MAX_RING_SIZE {
                continue;
            }
            for &next in self.neighbors_of(current) {
                if current == from && next == to {
                    continue;
                }
                if depth.contains_key(&next) {
                    continue;
                }
                let _ = depth.insert(next, current_depth + 1);
                let _ = parent.insert(next, current);
                if next == to {
                    let mut path = vec![to];
                    let mut cursor = to;
                    while let Some(&p) = parent.get(&cursor) {
                        path.push(p);
                        cursor = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }

    fn neighbors_of(&self, atom: AtomId) -> &[AtomId] {
        self.atoms
            .get(&atom)
            .map_or(&[], |record| record.neighbors.as_slice())
    }
}

impl StructureHost for MemoryStructure {
    fn molecules(&self) -> Vec<MoleculeId> {
        self.molecules.keys().copied().collect()
    }

    fn minimum_rings(&self, molecule: MoleculeId) -> Vec<Vec<AtomId>> {
        let Some(record) = self.molecules.get(&molecule) else {
            return Vec::new();
        };
        let mut seen: BTreeSet<Vec<AtomId>> = BTreeSet::new();
        let mut rings = Vec::new();
        for &(a, b) in &record.bonds {
            let Some(ring) = self.shortest_detour(a, b) else {
                continue;
            };
            let mut key = ring.clone();
            key.sort_unstable();
            if seen.insert(key) {
                rings.push(ring);
            }
        }
        rings
    }

    fn atom_name(&self, atom: AtomId) -> Option<&str> {
        self.atoms.get(&atom).map(|a| a.name.as_str())
    }

    fn atom_element(&self, atom: AtomId) -> Option<Element> {
        self.atoms.get(&atom).map(|a| a.element)
    }

    fn atom_coord(&self, atom: AtomId) -> Option<DVec3> {
        self.atoms.get(&atom).map(|a| a.coord)
    }

    fn atom_residue(&self, atom: AtomId) -> Option<ResidueId> {
        self.atoms.get(&atom).map(|a| a.residue)
    }

    fn atom_neighbors(&self, atom: AtomId) -> Vec<AtomId> {
        self.neighbors_of(atom).to_vec()
    }

    fn residue_type(&self, residue: ResidueId) -> Option<&str> {
        self.residues.get(&residue).map(|r| r.type_code.as_str())
    }

    fn residue_atoms(&self, residue: ResidueId) -> Vec<AtomId> {
        self.residues
            .get(&residue)
            .map(|r| r.atoms.clone())
            .unwrap_or_default()
    }

    fn residue_molecule(&self, residue: ResidueId) -> Option<MoleculeId> {
        self.residues.get(&residue).map(|r| r.molecule)
    }

    fn is_ligand(&self, residue: ResidueId) -> bool {
        self.residues.get(&residue).is_some_and(|r| r.ligand)
    }
}
