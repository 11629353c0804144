//! Glyph geometry builder.
//!
//! Turns a classified ring into a set of oriented, coloured primitives. All
//! shapes share one orientation scheme (see [`frame`]) and differ only in
//! point count, spine fractions, thickness and which triangles get the
//! primary or secondary colour.
//!
//! Geometry is computed in `f64` scene coordinates; angles are in degrees.

pub mod frame;
mod shapes;
pub mod transform;

use glam::DVec3;

use crate::error::SnfgError;
use crate::host::AtomView;
use crate::residue::ResidueType;
use crate::symbol::{Color, Shape};

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// One renderable element handed to the scene sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Filled triangle.
    Triangle {
        /// Corner positions, counter-clockwise seen from outside.
        vertices: [DVec3; 3],
        /// Fill colour.
        color: Color,
    },
    /// Solid sphere.
    Sphere {
        /// Sphere center.
        center: DVec3,
        /// Sphere radius.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
    /// Solid cylinder between two points.
    Cylinder {
        /// First cap center.
        start: DVec3,
        /// Second cap center.
        end: DVec3,
        /// Cylinder radius.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
}

impl Primitive {
    /// Fill colour of the primitive.
    #[must_use]
    pub fn color(&self) -> Color {
        match *self {
            Self::Triangle { color, .. }
            | Self::Sphere { color, .. }
            | Self::Cylinder { color, .. } => color,
        }
    }

    /// Whether the primitive is a triangle.
    #[must_use]
    pub fn is_triangle(&self) -> bool {
        matches!(self, Self::Triangle { .. })
    }
}

// ---------------------------------------------------------------------------
// GlyphSpec
// ---------------------------------------------------------------------------

/// Everything the shape constructors need to lay out one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSpec {
    /// Glyph shape.
    pub shape: Shape,
    /// Final glyph size (base size already multiplied by the shape scale).
    pub size: f64,
    /// Glyph position.
    pub center: DVec3,
    /// Point the glyph faces.
    pub facing: DVec3,
    /// Point fixing the roll around the facing direction.
    pub reference: DVec3,
    /// Primary colour.
    pub color1: Color,
    /// Secondary colour; equal to `color1` for single-colour residues.
    pub color2: Color,
}

impl GlyphSpec {
    /// Spec for a canonical residue type at `base_size`, scaled by the
    /// shape's scale factor.
    #[must_use]
    pub fn for_residue(
        residue_type: &ResidueType,
        base_size: f64,
        center: DVec3,
        facing: DVec3,
        reference: DVec3,
    ) -> Self {
        Self {
            shape: residue_type.shape,
            size: base_size * residue_type.shape.scale(),
            center,
            facing,
            reference,
            color1: residue_type.color1,
            color2: residue_type.secondary_color(),
        }
    }
}

/// Build the primitives of one glyph.
///
/// Fails with [`SnfgError::DegenerateGeometry`] when the facing point
/// coincides with the center, for every shape including spheres, or when
/// the reference point leaves the orientation undefined.
pub fn build(spec: &GlyphSpec) -> Result<Vec<Primitive>, SnfgError> {
    if spec.center.distance(spec.facing) == 0.0 {
        return Err(SnfgError::DegenerateGeometry(
            "facing point coincides with glyph center",
        ));
    }
    if !spec.size.is_finite() || spec.size <= 0.0 {
        return Err(SnfgError::DegenerateGeometry("glyph size must be positive"));
    }
    shapes::constructor(spec.shape)(spec)
}

/// Build a glyph from a shape name, rejecting unknown names before any
/// geometry is computed.
pub fn build_named(
    shape: &str,
    size: f64,
    (center, facing, reference): (DVec3, DVec3, DVec3),
    (color1, color2): (Color, Color),
) -> Result<Vec<Primitive>, SnfgError> {
    let shape: Shape = shape.parse()?;
    build(&GlyphSpec {
        shape,
        size,
        center,
        facing,
        reference,
        color1,
        color2,
    })
}

/// Mass-weighted centroid of ring atoms.
///
/// Falls back to the plain average when every atom is massless.
pub fn ring_center(atoms: &[AtomView<'_>]) -> Result<DVec3, SnfgError> {
    if atoms.is_empty() {
        return Err(SnfgError::DegenerateGeometry("ring has no atoms"));
    }
    let total: f64 = atoms.iter().map(|a| a.element.mass()).sum();
    if total > 0.0 {
        let weighted: DVec3 = atoms
            .iter()
            .map(|a| a.coord * a.element.mass())
            .sum();
        Ok(weighted / total)
    } else {
        let sum: DVec3 = atoms.iter().map(|a| a.coord).sum();
        Ok(sum / atoms.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{AtomId, Element, ResidueId};

    fn spec(shape: Shape) -> GlyphSpec {
        GlyphSpec {
            shape,
            size: 2.0,
            center: DVec3::new(1.0, 1.0, 1.0),
            facing: DVec3::new(4.0, 1.0, 1.0),
            reference: DVec3::new(1.0, 3.0, 0.5),
            color1: Color::Blue,
            color2: Color::White,
        }
    }

    fn count(prims: &[Primitive], color: Color) -> usize {
        prims
            .iter()
            .filter(|p| p.is_triangle() && p.color() == color)
            .count()
    }

    #[test]
    fn degenerate_center_fails_for_every_shape() {
        for shape in Shape::ALL {
            let mut s = spec(shape);
            s.facing = s.center;
            assert!(
                matches!(build(&s), Err(SnfgError::DegenerateGeometry(_))),
                "{shape} accepted a zero-length orientation"
            );
        }
    }

    #[test]
    fn reference_on_spine_fails() {
        for shape in Shape::ALL.into_iter().filter(|s| *s != Shape::Sphere) {
            let mut s = spec(shape);
            s.reference = DVec3::new(-2.0, 1.0, 1.0);
            assert!(build(&s).is_err(), "{shape} accepted a collinear reference");
        }
    }

    #[test]
    fn triangle_counts_and_colour_split() {
        let expected = [
            (Shape::Cube, 6, 6),
            (Shape::Diamond, 4, 4),
            (Shape::Cone, 8, 8),
            (Shape::Rectangle, 16, 0),
            (Shape::Star, 20, 0),
            (Shape::Hexagon, 24, 0),
            (Shape::Pentagon, 20, 0),
        ];
        for (shape, primary, secondary) in expected {
            let prims = build(&spec(shape)).unwrap();
            assert_eq!(prims.len(), primary + secondary, "{shape}");
            assert_eq!(count(&prims, Color::Blue), primary, "{shape}");
            assert_eq!(count(&prims, Color::White), secondary, "{shape}");
        }
    }

    #[test]
    fn sphere_is_single_primitive_at_center() {
        let prims = build(&spec(Shape::Sphere)).unwrap();
        assert_eq!(
            prims,
            vec![Primitive::Sphere {
                center: DVec3::new(1.0, 1.0, 1.0),
                radius: 2.0,
                color: Color::Blue,
            }]
        );
    }

    #[test]
    fn cube_is_centered_with_edge_equal_to_size() {
        let s = spec(Shape::Cube);
        let prims = build(&s).unwrap();
        let mut corners: Vec<DVec3> = Vec::new();
        for p in &prims {
            if let Primitive::Triangle { vertices, .. } = p {
                for v in vertices {
                    if !corners.iter().any(|c| c.distance(*v) < 1e-9) {
                        corners.push(*v);
                    }
                }
            }
        }
        assert_eq!(corners.len(), 8);
        let centroid: DVec3 = corners.iter().copied().sum::<DVec3>() / 8.0;
        assert!(centroid.distance(s.center) < 1e-9);
        let half_diagonal = s.size / 2.0 * 3f64.sqrt();
        for c in &corners {
            assert!((c.distance(s.center) - half_diagonal).abs() < 1e-9);
        }
    }

    #[test]
    fn all_vertices_are_finite() {
        for shape in Shape::ALL {
            for p in build(&spec(shape)).unwrap() {
                if let Primitive::Triangle { vertices, .. } = p {
                    assert!(vertices.iter().all(|v| v.is_finite()), "{shape}");
                }
            }
        }
    }

    /// Oblique orientation, so every rotation axis is off the coordinate
    /// axes.
    fn oblique(shape: Shape) -> GlyphSpec {
        GlyphSpec {
            shape,
            size: 2.3,
            center: DVec3::new(1.0, -0.5, 2.0),
            facing: DVec3::new(2.2, 0.4, 1.1),
            reference: DVec3::new(0.3, 1.7, 2.9),
            color1: Color::Blue,
            color2: Color::White,
        }
    }

    fn has_vertex(prims: &[Primitive], point: DVec3) -> bool {
        prims.iter().any(|p| match p {
            Primitive::Triangle { vertices, .. } => {
                vertices.iter().any(|v| v.distance(point) < 1e-9)
            }
            _ => false,
        })
    }

    #[test]
    fn oblique_vertices_match_known_positions() {
        let expected: [(Shape, &[DVec3]); 7] = [
            (Shape::Cube, &[
                DVec3::new(1.4325774690115407, -0.7674135545304851, 0.0741581777942042),
                DVec3::new(0.5674225309884591, -0.23258644546951468, 3.9258418222057956),
            ]),
            (Shape::Diamond, &[
                DVec3::new(0.25763169772829164, -0.38026317705295015, 1.1299124199181052),
                DVec3::new(1.7423683022717085, -0.6197368229470497, 2.870087580081895),
                DVec3::new(1.3860522796277086, -1.4788204962191904, 1.5359158766177545),
            ]),
            (Shape::Cone, &[
                DVec3::new(1.7726231803496484, 0.4979661693468716, 2.5528995804172085),
                DVec3::new(1.2687162286356655, -0.7169616126078864, 0.6660958628438063),
                DVec3::new(1.520669704492657, -0.10949772163050736, 1.6094977216305075),
                DVec3::new(-0.04922834390186903, -1.2869212579264018, 2.7869212579264016),
            ]),
            (Shape::Rectangle, &[
                DVec3::new(-0.3756623530656052, -2.1437570520059044, 1.1562328491623495),
                DVec3::new(2.3756623530656054, 1.1437570520059048, 2.8437671508376505),
            ]),
            (Shape::Star, &[
                DVec3::new(-0.424723560559747, -0.6034394540761157, 1.0330004884559707),
                DVec3::new(0.1940639639906242, -0.8062187318309085, 1.9754349000131437),
                DVec3::new(1.2895392097207814, -1.2341153721643927, 1.651936907463316),
            ]),
            (Shape::Hexagon, &[
                DVec3::new(0.11026054155601886, -1.3231174818336775, 1.5710870633944505),
                DVec3::new(1.889739458443981, 0.32311748183367756, 2.4289129366055495),
            ]),
            (Shape::Pentagon, &[
                DVec3::new(0.2432104327740229, -1.0583698841603388, 1.1232915972795245),
                DVec3::new(1.2692265758792716, -0.30730235934969025, 3.242380646230505),
                DVec3::new(1.1930261398138544, -0.9894102481095952, 1.7679579383088773),
            ]),
        ];
        for (shape, points) in expected {
            let prims = build(&oblique(shape)).unwrap();
            for point in points {
                assert!(has_vertex(&prims, *point), "{shape} lacks {point}");
            }
        }
    }

    #[test]
    fn unknown_shape_name_fails_before_geometry() {
        let p = DVec3::ZERO;
        let err = build_named(
            "triangle",
            1.0,
            (p, p, p),
            (Color::Blue, Color::Blue),
        )
        .unwrap_err();
        assert!(matches!(err, SnfgError::UnsupportedShape(_)));
    }

    #[test]
    fn named_build_matches_enum_build() {
        let s = spec(Shape::Star);
        let named = build_named(
            "star",
            s.size,
            (s.center, s.facing, s.reference),
            (s.color1, s.color2),
        )
        .unwrap();
        assert_eq!(named, build(&s).unwrap());
    }

    #[test]
    fn for_residue_applies_shape_scale() {
        let t = crate::residue::classify("NAG").unwrap();
        let s = GlyphSpec::for_residue(t, 4.0, DVec3::ZERO, DVec3::X, DVec3::Y);
        assert!((s.size - 4.0 * 0.806).abs() < 1e-12);
        assert_eq!(s.color2, Color::Blue);
    }

    #[test]
    fn ring_center_is_mass_weighted() {
        let atoms = [
            AtomView {
                id: AtomId(0),
                name: "C1",
                element: Element::C,
                coord: DVec3::ZERO,
                residue: ResidueId(0),
            },
            AtomView {
                id: AtomId(1),
                name: "O5",
                element: Element::O,
                coord: DVec3::new(1.0, 0.0, 0.0),
                residue: ResidueId(0),
            },
        ];
        let c = ring_center(&atoms).unwrap();
        let expected = 15.999 / (12.011 + 15.999);
        assert!((c.x - expected).abs() < 1e-12);
        assert!(ring_center(&[]).is_err());
    }

    #[test]
    fn massless_ring_uses_plain_average() {
        let atoms = [
            AtomView {
                id: AtomId(0),
                name: "X1",
                element: Element::Other,
                coord: DVec3::ZERO,
                residue: ResidueId(0),
            },
            AtomView {
                id: AtomId(1),
                name: "X2",
                element: Element::Other,
                coord: DVec3::new(2.0, 0.0, 0.0),
                residue: ResidueId(0),
            },
        ];
        assert_eq!(ring_center(&atoms).unwrap(), DVec3::new(1.0, 0.0, 0.0));
    }
}
