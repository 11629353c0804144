//! Read-only view of the host's molecular structure.
//!
//! The glyph pipeline never owns atoms, residues or molecules. It queries
//! them through [`StructureHost`], which a visualization environment
//! implements over its own data model. [`memory::MemoryStructure`] is a
//! self-contained implementation used by the binary and the tests.

pub mod memory;

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::SnfgError;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Host-assigned atom identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct AtomId(pub u32);

/// Host-assigned residue identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct ResidueId(pub u32);

/// Host-assigned molecule identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct MoleculeId(pub u32);

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atom #{}", self.0)
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "residue #{}", self.0)
    }
}

impl fmt::Display for MoleculeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "molecule #{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Chemical element of an atom, reduced to what glycan structures contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Fluorine.
    F,
    /// Sodium.
    Na,
    /// Magnesium.
    Mg,
    /// Phosphorus.
    P,
    /// Sulfur.
    S,
    /// Chlorine.
    Cl,
    /// Potassium.
    K,
    /// Calcium.
    Ca,
    /// Iron.
    Fe,
    /// Zinc.
    Zn,
    /// Selenium.
    Se,
    /// Anything else. Carries no mass.
    Other,
}

impl Element {
    /// Parse an element symbol (case-insensitive). Unknown symbols map to
    /// [`Element::Other`].
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.trim().to_ascii_uppercase().as_str() {
            "H" => Self::H,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "F" => Self::F,
            "NA" => Self::Na,
            "MG" => Self::Mg,
            "P" => Self::P,
            "S" => Self::S,
            "CL" => Self::Cl,
            "K" => Self::K,
            "CA" => Self::Ca,
            "FE" => Self::Fe,
            "ZN" => Self::Zn,
            "SE" => Self::Se,
            _ => Self::Other,
        }
    }

    /// Standard atomic weight in daltons.
    #[must_use]
    pub fn mass(self) -> f64 {
        match self {
            Self::H => 1.008,
            Self::C => 12.011,
            Self::N => 14.007,
            Self::O => 15.999,
            Self::F => 18.998,
            Self::Na => 22.990,
            Self::Mg => 24.305,
            Self::P => 30.974,
            Self::S => 32.06,
            Self::Cl => 35.45,
            Self::K => 39.098,
            Self::Ca => 40.078,
            Self::Fe => 55.845,
            Self::Zn => 65.38,
            Self::Se => 78.971,
            Self::Other => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Query interface
// ---------------------------------------------------------------------------

/// Queries the glyph pipeline issues against the host data model.
///
/// All methods are read-only. Lookups for ids the host no longer knows
/// return `None` (or an empty list) rather than failing.
pub trait StructureHost {
    /// All molecules currently open in the host.
    fn molecules(&self) -> Vec<MoleculeId>;

    /// Minimal atom rings of a molecule, each ordered along the cycle.
    fn minimum_rings(&self, molecule: MoleculeId) -> Vec<Vec<AtomId>>;

    /// Atom name (`"C1"`, `"O5"`, `"CA"`, ...).
    fn atom_name(&self, atom: AtomId) -> Option<&str>;

    /// Atom element.
    fn atom_element(&self, atom: AtomId) -> Option<Element>;

    /// Atom coordinate in the host's scene frame.
    fn atom_coord(&self, atom: AtomId) -> Option<DVec3>;

    /// Residue that owns the atom.
    fn atom_residue(&self, atom: AtomId) -> Option<ResidueId>;

    /// Atoms covalently bonded to `atom`.
    fn atom_neighbors(&self, atom: AtomId) -> Vec<AtomId>;

    /// Residue type code (`"NAG"`, `"BGLCNA"`, `"4YB"`, ...).
    fn residue_type(&self, residue: ResidueId) -> Option<&str>;

    /// All atoms of a residue.
    fn residue_atoms(&self, residue: ResidueId) -> Vec<AtomId>;

    /// Molecule that owns the residue.
    fn residue_molecule(&self, residue: ResidueId) -> Option<MoleculeId>;

    /// Host selection predicate for hetero/ligand residues.
    fn is_ligand(&self, residue: ResidueId) -> bool;

    /// First atom of `residue` named `name`.
    fn find_residue_atom(
        &self,
        residue: ResidueId,
        name: &str,
    ) -> Option<AtomId> {
        self.residue_atoms(residue)
            .into_iter()
            .find(|&atom| self.atom_name(atom) == Some(name))
    }
}

/// Snapshot of the per-atom data the pipeline needs, fetched in one go.
#[derive(Debug, Clone, Copy)]
pub struct AtomView<'a> {
    /// Atom identifier.
    pub id: AtomId,
    /// Atom name.
    pub name: &'a str,
    /// Atom element.
    pub element: Element,
    /// Atom coordinate.
    pub coord: DVec3,
    /// Owning residue.
    pub residue: ResidueId,
}

/// Fetch an [`AtomView`], failing with [`SnfgError::UnknownAtom`] when any
/// field is missing.
pub fn atom_view<H: StructureHost + ?Sized>(
    host: &H,
    atom: AtomId,
) -> Result<AtomView<'_>, SnfgError> {
    let missing = || SnfgError::UnknownAtom(atom);
    Ok(AtomView {
        id: atom,
        name: host.atom_name(atom).ok_or_else(missing)?,
        element: host.atom_element(atom).ok_or_else(missing)?,
        coord: host.atom_coord(atom).ok_or_else(missing)?,
        residue: host.atom_residue(atom).ok_or_else(missing)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_symbols_are_case_insensitive() {
        assert_eq!(Element::from_symbol("c"), Element::C);
        assert_eq!(Element::from_symbol(" O "), Element::O);
        assert_eq!(Element::from_symbol("Ca"), Element::Ca);
        assert_eq!(Element::from_symbol("Xx"), Element::Other);
    }

    #[test]
    fn other_element_has_no_mass() {
        assert_eq!(Element::Other.mass(), 0.0);
        assert!(Element::O.mass() > Element::C.mass());
    }
}
