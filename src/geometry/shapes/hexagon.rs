use super::slab;
use crate::error::SnfgError;
use crate::geometry::frame::Frame;
use crate::geometry::transform::rotate_ring;
use crate::geometry::{GlyphSpec, Primitive};

// Front center is 12, back center 13.
const FACES: [[usize; 3]; 12] = [
    [0, 1, 12],
    [0, 12, 5],
    [2, 12, 1],
    [2, 3, 12],
    [4, 12, 3],
    [4, 5, 12],
    [6, 13, 7],
    [6, 11, 13],
    [8, 7, 13],
    [8, 13, 9],
    [10, 9, 13],
    [10, 13, 11],
];

const ANGLES: [f64; 6] = [0.0, 45.0, 135.0, 180.0, 225.0, 315.0];

/// Flat hexagonal slab used for unknown and assigned residues.
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

    let mut out = Vec::with_capacity(24);
    slab(&mut out, &outer, spec.center, offset, &FACES, spec.color1);
    Ok(out)
}
