use crate::error::SnfgError;
use crate::geometry::{GlyphSpec, Primitive};

/// Sphere of radius `size` at the glyph center. Hexoses are single-colour,
/// so only `color1` is used.
#[allow(clippy::unnecessary_wraps)]
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    Ok(vec![Primitive::Sphere {
        center: spec.center,
        radius: spec.size,
        color: spec.color1,
    }])
}
