//! Residue classification table.
//!
//! Maps residue type codes from the common (PDB chemical component),
//! CHARMM and GLYCAM naming schemes to a canonical SNFG residue type.
//!
//! The table keeps every `(scheme, code)` pair separately and additionally
//! flattens them into one code index. Flattening walks residues in table
//! order and, per residue, the common, CHARMM and GLYCAM codes; a code seen
//! twice resolves to the last writer. Such cross-scheme collisions are
//! recorded in [`ResidueTable::collisions`] and logged once when the table
//! is built.

mod codes;
mod definitions;

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::symbol::{Color, Shape};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Canonical SNFG residue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueType {
    /// Canonical identifier (`"GlcNAc"`, `"Man"`, ...).
    pub id: &'static str,
    /// Glyph shape.
    pub shape: Shape,
    /// Primary colour.
    pub color1: Color,
    /// Secondary colour of split glyphs (hexosamines, uronic acids, ...).
    pub color2: Option<Color>,
    /// Human-readable name.
    pub name: &'static str,
}

impl ResidueType {
    /// Colour used for the second half of split glyphs; equals
    /// [`ResidueType::color1`] for single-colour residues.
    #[must_use]
    pub fn secondary_color(&self) -> Color {
        self.color2.unwrap_or(self.color1)
    }
}

/// Residue naming convention a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamingScheme {
    /// PDB chemical component dictionary codes.
    Common,
    /// CHARMM force field residue names.
    Charmm,
    /// GLYCAM force field residue names.
    Glycam,
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Common => "common",
            Self::Charmm => "charmm",
            Self::Glycam => "glycam",
        })
    }
}

/// A code claimed by two different canonical residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCollision {
    /// The contested code.
    pub code: &'static str,
    /// Earlier claim, overwritten in the flat index.
    pub shadowed: (NamingScheme, &'static str),
    /// Later claim, the one [`ResidueTable::classify`] returns.
    pub winner: (NamingScheme, &'static str),
}

// ---------------------------------------------------------------------------
// ResidueTable
// ---------------------------------------------------------------------------

/// Lookup table from residue type codes to canonical residue types.
#[derive(Debug)]
pub struct ResidueTable {
    types: FxHashMap<&'static str, &'static ResidueType>,
    scoped: FxHashMap<NamingScheme, FxHashMap<&'static str, &'static ResidueType>>,
    flat: FxHashMap<&'static str, (NamingScheme, &'static ResidueType)>,
    collisions: Vec<CodeCollision>,
}

/// `(canonical id, scheme, codes)` row of the code listing.
type SchemeCodes = (&'static str, NamingScheme, &'static [&'static str]);

static TABLE: LazyLock<ResidueTable> = LazyLock::new(ResidueTable::build);

/// The process-wide residue table.
pub fn table() -> &'static ResidueTable {
    &TABLE
}

/// Classify a residue type code with the process-wide table.
#[must_use]
pub fn classify(code: &str) -> Option<&'static ResidueType> {
    TABLE.classify(code)
}

impl ResidueTable {
    /// Build the table from the literal definitions.
    #[must_use]
    pub fn build() -> Self {
        Self::from_parts(definitions::RESIDUE_TYPES, codes::RESIDUE_CODES)
    }

    fn from_parts(
        residue_types: &'static [ResidueType],
        residue_codes: &'static [SchemeCodes],
    ) -> Self {
        let types: FxHashMap<&'static str, &'static ResidueType> =
            residue_types.iter().map(|t| (t.id, t)).collect();
        let mut scoped: FxHashMap<NamingScheme, FxHashMap<_, _>> =
            FxHashMap::default();
        let mut flat = FxHashMap::default();
        let mut collisions = Vec::new();

        for &(id, scheme, codes) in residue_codes {
            let Some(&residue_type) = types.get(id) else {
                log::warn!("residue codes reference undefined type '{id}'");
                continue;
            };
            for &code in codes {
                let _ = scoped
                    .entry(scheme)
                    .or_default()
                    .insert(code, residue_type);
                if let Some((prev_scheme, prev)) =
                    flat.insert(code, (scheme, residue_type))
                {
                    if prev.id != residue_type.id {
                        log::warn!(
                            "residue code '{code}' claimed by {} ({prev_scheme}) \
                             and {} ({scheme}); using {}",
                            prev.id,
                            residue_type.id,
                            residue_type.id
                        );
                        collisions.push(CodeCollision {
                            code,
                            shadowed: (prev_scheme, prev.id),
                            winner: (scheme, residue_type.id),
                        });
                    }
                }
            }
        }

        log::debug!(
            "residue table: {} types, {} codes, {} collisions",
            types.len(),
            flat.len(),
            collisions.len()
        );

        Self {
            types,
            scoped,
            flat,
            collisions,
        }
    }

    /// Canonical residue type for a code from any naming scheme.
    #[must_use]
    pub fn classify(&self, code: &str) -> Option<&'static ResidueType> {
        self.flat.get(code).map(|&(_, t)| t)
    }

    /// Canonical residue type for a code from one naming scheme only.
    #[must_use]
    pub fn classify_in(
        &self,
        scheme: NamingScheme,
        code: &str,
    ) -> Option<&'static ResidueType> {
        self.scoped.get(&scheme)?.get(code).copied()
    }

    /// Whether `code` names any known residue.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.flat.contains_key(code)
    }

    /// Residue type by canonical id.
    #[must_use]
    pub fn residue_type(&self, id: &str) -> Option<&'static ResidueType> {
        self.types.get(id).copied()
    }

    /// Codes claimed by more than one canonical residue.
    #[must_use]
    pub fn collisions(&self) -> &[CodeCollision] {
        &self.collisions
    }

    /// Number of distinct codes in the flat index.
    #[must_use]
    pub fn code_count(&self) -> usize {
        self.flat.len()
    }

    /// Number of canonical residue types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nag_is_glcnac() {
        let t = classify("NAG").unwrap();
        assert_eq!(t.id, "GlcNAc");
        assert_eq!(t.shape, Shape::Cube);
        assert_eq!(t.color1, Color::Blue);
        // Pure lookup: repeated calls agree.
        for _ in 0..3 {
            assert_eq!(classify("NAG").unwrap().id, "GlcNAc");
        }
    }

    #[test]
    fn man_is_green_sphere() {
        let t = classify("MAN").unwrap();
        assert_eq!(t.id, "Man");
        assert_eq!(t.shape, Shape::Sphere);
        assert_eq!(t.color1, Color::Green);
        assert_eq!(t.secondary_color(), Color::Green);
    }

    #[test]
    fn all_schemes_resolve() {
        assert_eq!(classify("BGLCNA").unwrap().id, "GlcNAc");
        assert_eq!(classify("4YB").unwrap().id, "GlcNAc");
        assert_eq!(classify("0SA").unwrap().id, "Neu5Ac");
        assert_eq!(classify("FUC").unwrap().id, "Fuc");
        assert!(classify("ALA").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn split_colours() {
        let glcn = classify("GCS").unwrap();
        assert_eq!(glcn.color1, Color::White);
        assert_eq!(glcn.color2, Some(Color::Blue));
        let glca = classify("GCU").unwrap();
        assert_eq!(glca.shape, Shape::Diamond);
        assert_eq!(glca.color1, Color::Blue);
        assert_eq!(glca.color2, Some(Color::White));
        let tala = table().residue_type("TalA").unwrap();
        assert_eq!(tala.color2, Some(Color::White));
    }

    #[test]
    fn collision_is_recorded_and_last_writer_wins() {
        let t = table();
        let collisions = t.collisions();
        assert_eq!(collisions.len(), 1);
        let c = &collisions[0];
        assert_eq!(c.code, "4YS");
        assert_eq!(c.shadowed, (NamingScheme::Common, "GlcNAc"));
        assert_eq!(c.winner, (NamingScheme::Glycam, "GlcN"));
        assert_eq!(t.classify("4YS").unwrap().id, "GlcN");
        assert_eq!(
            t.classify_in(NamingScheme::Common, "4YS").unwrap().id,
            "GlcNAc"
        );
    }

    #[test]
    fn table_size() {
        let t = table();
        assert_eq!(t.type_count(), 67);
        assert_eq!(t.code_count(), 1571);
    }
}
