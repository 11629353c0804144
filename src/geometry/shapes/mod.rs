//! Per-shape constructors and the shape → constructor dispatch table.

mod cone;
mod cube;
mod diamond;
mod hexagon;
mod pentagon;
mod rectangle;
mod sphere;
mod star;

use glam::DVec3;

use super::{GlyphSpec, Primitive};
use crate::error::SnfgError;
use crate::symbol::{Color, Shape};

/// Signature shared by every shape constructor.
pub(super) type Constructor = fn(&GlyphSpec) -> Result<Vec<Primitive>, SnfgError>;

/// Constructor for `shape`.
pub(super) fn constructor(shape: Shape) -> Constructor {
    match shape {
        Shape::Sphere => sphere::build,
        Shape::Cube => cube::build,
        Shape::Diamond => diamond::build,
        Shape::Cone => cone::build,
        Shape::Rectangle => rectangle::build,
        Shape::Star => star::build,
        Shape::Hexagon => hexagon::build,
        Shape::Pentagon => pentagon::build,
    }
}

/// Emit one triangle per index triple, all in `color`.
fn fan(
    out: &mut Vec<Primitive>,
    vertices: &[DVec3],
    color: Color,
    triangles: &[[usize; 3]],
) {
    out.extend(triangles.iter().map(|&[a, b, c]| Primitive::Triangle {
        vertices: [vertices[a], vertices[b], vertices[c]],
        color,
    }));
}

/// Flat extruded polygon: `outer` pushed by `±offset` into a front and a
/// back face, closed by side quads.
///
/// Vertex layout for the face tables: front `0..n`, back `n..2n`, front
/// center `2n`, back center `2n + 1`.
fn slab(
    out: &mut Vec<Primitive>,
    outer: &[DVec3],
    center: DVec3,
    offset: DVec3,
    faces: &[[usize; 3]],
    color: Color,
) {
    let n = outer.len();
    let mut vertices: Vec<DVec3> = Vec::with_capacity(2 * n + 2);
    vertices.extend(outer.iter().map(|&p| p + offset));
    vertices.extend(outer.iter().map(|&p| p - offset));
    vertices.push(center + offset);
    vertices.push(center - offset);

    fan(out, &vertices, color, faces);

    let sides: Vec<[usize; 3]> = (0..n)
        .flat_map(|i| {
            let j = (i + 1) % n;
            [[n + i, n + j, i], [n + j, j, i]]
        })
        .collect();
    fan(out, &vertices, color, &sides);
}
