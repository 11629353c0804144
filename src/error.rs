//! Crate-level error types.

use std::fmt;

use crate::host::{AtomId, ResidueId};

/// Errors produced by the snfg3d crate.
#[derive(Debug)]
pub enum SnfgError {
    /// Shape name outside the supported glyph set.
    UnsupportedShape(String),
    /// Rendering method name outside `icon`, `full`, `fullred`, `fullshown`.
    UnsupportedMethod(String),
    /// Orientation could not be derived (coincident points or a
    /// zero-length rotation axis).
    DegenerateGeometry(&'static str),
    /// An N-linked attachment whose residue has no `CA` atom.
    MissingAlphaCarbon {
        /// Residue holding the linking nitrogen.
        residue: ResidueId,
    },
    /// A session handed out every glyph id without being disabled.
    GlyphIdsExhausted,
    /// Host returned nothing for an atom the pipeline was handed.
    UnknownAtom(AtomId),
    /// Host returned nothing for a residue the pipeline was handed.
    UnknownResidue(ResidueId),
    /// Malformed command-line style arguments.
    InvalidArgument(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Structure file could not be parsed.
    StructureParse(String),
}

impl SnfgError {
    /// Whether this error must abort a whole rebuild instead of only
    /// skipping the residue being processed.
    #[must_use]
    pub fn aborts_rebuild(&self) -> bool {
        matches!(
            self,
            Self::MissingAlphaCarbon { .. } | Self::GlyphIdsExhausted
        )
    }
}

impl fmt::Display for SnfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedShape(shape) => write!(
                f,
                "unsupported shape '{shape}': expected one of sphere, cube, \
                 diamond, cone, rectangle, star, hexagon, pentagon"
            ),
            Self::UnsupportedMethod(method) => write!(
                f,
                "method '{method}' not supported: try icon, full, fullred, \
                 fullshown"
            ),
            Self::DegenerateGeometry(what) => {
                write!(f, "degenerate glyph geometry: {what}")
            }
            Self::MissingAlphaCarbon { residue } => write!(
                f,
                "N-linked residue {residue} has no alpha carbon (CA)"
            ),
            Self::GlyphIdsExhausted => {
                f.write_str("glyph ids exhausted; disable the session first")
            }
            Self::UnknownAtom(atom) => write!(f, "unknown atom {atom}"),
            Self::UnknownResidue(residue) => {
                write!(f, "unknown residue {residue}")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::StructureParse(msg) => {
                write!(f, "structure parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SnfgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SnfgError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
