use super::fan;
use crate::error::SnfgError;
use crate::geometry::frame::Frame;
use crate::geometry::{GlyphSpec, Primitive};

/// Faces drawn in the primary colour. Together with [`SECONDARY`] they split
/// the cube along a diagonal plane, giving the half-filled hexosamine cube.
const PRIMARY: [[usize; 3]; 6] =
    [[1, 2, 3], [0, 1, 5], [3, 6, 7], [4, 5, 7], [1, 3, 7], [0, 4, 6]];
const SECONDARY: [[usize; 3]; 6] =
    [[0, 2, 1], [2, 6, 3], [0, 5, 4], [4, 7, 6], [1, 7, 5], [0, 6, 2]];

/// Cube of edge `size` with one face pair perpendicular to the spine.
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    let half = spec.size / 2.0;
    let frame = Frame::square(spec.center, spec.facing, spec.reference, half)?;
    let forward = frame.normal()? * half;

    let corners = [
        frame.o1 + forward,
        frame.o2 + forward,
        frame.o3 + forward,
        frame.o4 + forward,
        frame.o1 - forward,
        frame.o2 - forward,
        frame.o3 - forward,
        frame.o4 - forward,
    ];

    let mut out = Vec::with_capacity(12);
    fan(&mut out, &corners, spec.color1, &PRIMARY);
    fan(&mut out, &corners, spec.color2, &SECONDARY);
    Ok(out)
}
