use super::fan;
use crate::error::SnfgError;
use crate::geometry::frame;
use crate::geometry::transform::{rotate_ring, unit};
use crate::geometry::{GlyphSpec, Primitive};

// Vertex layout: base ring 0..8, apex 8, base center 9. The colour split
// alternates quarters of the apex and base fans.
const APEX_PRIMARY: [[usize; 3]; 4] = [[0, 1, 8], [0, 8, 7], [2, 8, 1], [2, 3, 8]];
const APEX_SECONDARY: [[usize; 3]; 4] =
    [[4, 8, 3], [4, 5, 8], [6, 8, 5], [6, 7, 8]];
const BASE_PRIMARY: [[usize; 3]; 4] = [[0, 9, 1], [0, 7, 9], [4, 3, 9], [4, 9, 5]];
const BASE_SECONDARY: [[usize; 3]; 4] =
    [[2, 1, 9], [2, 9, 3], [6, 5, 9], [6, 9, 7]];

const BASE_ANGLES: [f64; 8] =
    [45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 360.0];

/// Octagonal double cone. The apex is pulled toward the facing point and
/// the base pushed away from it, so the glyph's mass sits off-center.
pub(super) fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    let half = spec.size / 2.0;
    let (apex, base) =
        frame::spine(spec.center, spec.facing, half * 0.66, half * 1.33)?;

    let o1 = apex + frame::perpendicular(apex, base, spec.reference)?;
    let o3 = apex
        + unit(
            (o1 - base).cross(base - spec.facing),
            "cone radius direction is undefined",
        )? * half;

    let mut vertices =
        rotate_ring((o1, o3, apex), &BASE_ANGLES, o3 - apex, apex)?;
    vertices.push(apex);
    vertices.push(base);

    let mut out = Vec::with_capacity(16);
    fan(&mut out, &vertices, spec.color1, &APEX_PRIMARY);
    fan(&mut out, &vertices, spec.color2, &APEX_SECONDARY);
    fan(&mut out, &vertices, spec.color1, &BASE_PRIMARY);
    fan(&mut out, &vertices, spec.color2, &BASE_SECONDARY);
    Ok(out)
}
