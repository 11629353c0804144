use super::fan;
use super::pentagon::ANGLES;
use crate::error::SnfgError;
use crate::geometry::frame::Frame;
use crate::geometry::transform::rotate_ring;
use crate::geometry::{GlyphSpec, Primitive};

// Vertex layout: tips 0..5, notches 5..10, front center 10, back center 11.
const FRONT: usize = 10;
const BACK: usize = 11;

/// Five-pointed star for pentoses, 1.5 times larger than the base size.
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    let star_size = spec.size * 1.5;
    let half = star_size / 2.0;
    let thickness = star_size / 4.0;
    let frame = Frame::square(spec.center, spec.facing, spec.reference, half)?;
    let axis = frame.in_plane_axis(spec.center);

    let mut vertices =
        rotate_ring(axis, &ANGLES, frame.x2 - spec.center, spec.center)?;
    vertices.extend(rotate_ring(
        axis,
        &ANGLES,
        (frame.x1 - spec.center) * 0.5,
        spec.center,
    )?);
    let offset = frame.normal()? * thickness;
    vertices.push(spec.center + offset);
    vertices.push(spec.center - offset);

    // Each tip joins the two notches flanking it, on both faces.
    let triangles: Vec<[usize; 3]> = (0..5)
        .flat_map(|tip| {
            let left = 5 + (tip + 2) % 5;
            let right = 5 + (tip + 3) % 5;
            [
                [tip, FRONT, left],
                [tip, left, BACK],
                [tip, right, FRONT],
                [tip, BACK, right],
            ]
        })
        .collect();

    let mut out = Vec::with_capacity(triangles.len());
    fan(&mut out, &vertices, spec.color1, &triangles);
    Ok(out)
}
