use super::slab;
use crate::error::SnfgError;
use crate::geometry::frame::Frame;
use crate::geometry::transform::rotate_ring;
use crate::geometry::{GlyphSpec, Primitive};

// Front center is 10, back center 11.
const FACES: [[usize; 3]; 10] = [
    [0, 1, 10],
    [0, 10, 4],
    [2, 10, 1],
    [2, 3, 10],
    [4, 10, 3],
    [5, 11, 6],
    [5, 9, 11],
    [7, 6, 11],
    [7, 11, 8],
    [9, 8, 11],
];

pub(super) const ANGLES: [f64; 5] = [72.0, 144.0, 216.0, 288.0, 360.0];

/// Flat pentagonal slab for ketoses.
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    let half = spec.size / 2.0;
    let thickness = spec.size / 4.0;
    let frame = Frame::square(spec.center, spec.facing, spec.reference, half)?;

    let outer = rotate_ring(
        frame.in_plane_axis(spec.center),
        &ANGLES,
        frame.x2 - spec.center,
        spec.center,
    )?;
    let offset = frame.normal()? * thickness;

    let mut out = Vec::with_capacity(20);
    slab(&mut out, &outer, spec.center, offset, &FACES, spec.color1);
    Ok(out)
}
