use super::fan;
use crate::error::SnfgError;
use crate::geometry::frame::{self, Frame};
use crate::geometry::transform::rotate_ring;
use crate::geometry::{GlyphSpec, Primitive};

// Vertex layout: outer corners 0..4, top 4, bottom 5.
const PRIMARY: [[usize; 3]; 4] = [[0, 5, 1], [0, 3, 5], [2, 4, 1], [2, 3, 4]];
const SECONDARY: [[usize; 3]; 4] = [[0, 1, 4], [0, 4, 3], [2, 1, 5], [2, 5, 3]];

/// Octahedron with four outer corners around the center and two tips on
/// the normal of the frame plane. The colour split runs across the tips.
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    let half = spec.size * 0.5;
    let (x1, x2) = frame::spine(spec.center, spec.facing, half, half)?;
    // Not normalised: the square width scales with the reference distance.
    let perp = frame::raw_perpendicular(x1, x2, spec.reference) * half;
    let square = Frame::around(x1, x2, perp);

    let mut vertices = rotate_ring(
        (square.o1, spec.center, square.o2),
        &[90.0, 180.0, 270.0, 360.0],
        x2 - spec.center,
        spec.center,
    )?;
    let tip = square.normal()? * half;
    vertices.push(spec.center + tip);
    vertices.push(spec.center - tip);

    let mut out = Vec::with_capacity(8);
    fan(&mut out, &vertices, spec.color1, &PRIMARY);
    fan(&mut out, &vertices, spec.color2, &SECONDARY);
    Ok(out)
}
