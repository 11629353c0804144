use super::slab;
use crate::error::SnfgError;
use crate::geometry::frame::Frame;
use crate::geometry::transform::rotate_ring;
use crate::geometry::{GlyphSpec, Primitive};

// Front center is 8, back center 9.
const FACES: [[usize; 3]; 8] = [
    [0, 1, 8],
    [0, 8, 3],
    [2, 8, 1],
    [2, 3, 8],
    [4, 9, 5],
    [4, 7, 9],
    [6, 5, 9],
    [6, 9, 7],
];

/// Flat box elongated along the spine.
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    let half = spec.size / 1.2;
    let thickness = spec.size / 1.8;
    let frame = Frame::square(spec.center, spec.facing, spec.reference, half)?;

    let outer = rotate_ring(
        frame.in_plane_axis(spec.center),
        &[45.0, 90.0, 225.0, 270.0],
        frame.x2 - spec.center,
        spec.center,
    )?;
    let offset = frame.normal()? * thickness;

    let mut out = Vec::with_capacity(16);
    slab(&mut out, &outer, spec.center, offset, &FACES, spec.color1);
    Ok(out)
}
