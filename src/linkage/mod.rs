//! Linkage connector resolution.
//!
//! Classifies how a sugar ring is attached by walking the bonded
//! neighbourhood of its anchor atom, and lays out the connector (an end
//! sphere plus a cylinder from the glyph center) that visualises the
//! attachment.
//!
//! Decision order, first match wins:
//!
//! 1. An oxygen neighbour from another residue that is not the ring oxygen.
//!    Its carbon neighbour in a third residue decides between
//!    [`LinkageKind::InterGlyph`], [`LinkageKind::OLinked`] and
//!    [`LinkageKind::GlycamCap`]; without a carbon it is
//!    [`LinkageKind::ReducingEnd`].
//! 2. A nitrogen neighbour: [`LinkageKind::NLinked`] to the alpha carbon of
//!    the nitrogen's residue. A missing alpha carbon is a hard error.
//! 3. Otherwise [`LinkageKind::Terminal`].

use std::fmt;

use glam::DVec3;
use rustc_hash::FxHashMap;

use crate::error::SnfgError;
use crate::geometry::transform::unit;
use crate::geometry::Primitive;
use crate::host::{atom_view, AtomView, Element, ResidueId, StructureHost};
use crate::ring::DetectedRing;
use crate::symbol::{Color, Shape};

/// Distance of the synthetic endpoint of terminal connectors from the
/// anchor atom.
pub const TERMINAL_OFFSET: f64 = 1.43;

/// Radius of the label marker spheres and their link.
pub const LABEL_MARKER_RADIUS: f64 = 0.1;

/// Name of the protein backbone alpha carbon.
const ALPHA_CARBON: &str = "CA";

// ---------------------------------------------------------------------------
// LinkageKind
// ---------------------------------------------------------------------------

/// How a sugar ring is attached to its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkageKind {
    /// Glycan bound to a protein side-chain oxygen (Ser/Thr).
    OLinked,
    /// Glycan bound to a protein side-chain nitrogen (Asn).
    NLinked,
    /// Free anomeric oxygen marking the reducing end.
    ReducingEnd,
    /// Synthetic capping group (GLYCAM OME/TBT) on the anomeric oxygen.
    GlycamCap,
    /// Glycosidic bond to another classified sugar.
    InterGlyph,
    /// Nothing attached to the anchor.
    Terminal,
}

impl LinkageKind {
    /// Lower-case kind name used in batch names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::OLinked => "o-linked",
            Self::NLinked => "n-linked",
            Self::ReducingEnd => "reducing-end",
            Self::GlycamCap => "glycam-cap",
            Self::InterGlyph => "inter-glyph",
            Self::Terminal => "terminal",
        }
    }

    /// Whether connectors of this kind are drawn with reduced radii.
    #[must_use]
    pub fn is_reduced(self) -> bool {
        matches!(self, Self::ReducingEnd | Self::GlycamCap)
    }
}

impl fmt::Display for LinkageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Radii used for connector geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorStyle {
    /// Base glyph size of the session.
    pub base_size: f64,
    /// Cylinder (and end sphere) radius of regular connectors.
    pub cylinder_radius: f64,
    /// Cylinder reduction factor for reducing-end and cap connectors.
    pub cylinder_redfac: f64,
    /// End-sphere reduction factor for reducing-end and cap connectors.
    pub sphere_redfac: f64,
}

impl ConnectorStyle {
    /// `(sphere radius, cylinder radius)` for a connector of `kind`.
    #[must_use]
    pub fn radii(&self, kind: LinkageKind) -> (f64, f64) {
        if kind.is_reduced() {
            (
                self.base_size * Shape::Sphere.scale() * self.sphere_redfac,
                self.cylinder_radius * self.cylinder_redfac,
            )
        } else {
            (self.cylinder_radius, self.cylinder_radius)
        }
    }
}

// ---------------------------------------------------------------------------
// Connector
// ---------------------------------------------------------------------------

/// Resolved attachment of one glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Attachment classification.
    pub kind: LinkageKind,
    /// Residue of the glyph the connector starts at.
    pub residue: ResidueId,
    /// Glyph center.
    pub start: DVec3,
    /// Attachment point.
    pub end: DVec3,
    /// End sphere radius.
    pub sphere_radius: f64,
    /// Cylinder radius.
    pub cylinder_radius: f64,
    /// Linked glyph residue for [`LinkageKind::InterGlyph`].
    pub target: Option<ResidueId>,
    /// Name of the attachment carbon for [`LinkageKind::InterGlyph`].
    pub label: Option<String>,
}

/// Label marker pair hosting a bond-type label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMarker {
    /// Marker primitives: two spheres joined by a link.
    pub primitives: Vec<Primitive>,
    /// Label text.
    pub text: String,
    /// Label anchor, halfway along the link.
    pub position: DVec3,
}

impl Connector {
    /// End sphere and cylinder, both gray.
    #[must_use]
    pub fn primitives(&self) -> Vec<Primitive> {
        vec![
            Primitive::Sphere {
                center: self.end,
                radius: self.sphere_radius,
                color: Color::Gray,
            },
            Primitive::Cylinder {
                start: self.start,
                end: self.end,
                radius: self.cylinder_radius,
                color: Color::Gray,
            },
        ]
    }

    /// Marker pair carrying the attachment atom name, for labelled
    /// connectors only.
    #[must_use]
    pub fn label_marker(&self) -> Option<LabelMarker> {
        let text = self.label.clone()?;
        Some(LabelMarker {
            primitives: vec![
                Primitive::Sphere {
                    center: self.start,
                    radius: LABEL_MARKER_RADIUS,
                    color: Color::Black,
                },
                Primitive::Sphere {
                    center: self.end,
                    radius: LABEL_MARKER_RADIUS,
                    color: Color::Black,
                },
                Primitive::Cylinder {
                    start: self.start,
                    end: self.end,
                    radius: LABEL_MARKER_RADIUS,
                    color: Color::Black,
                },
            ],
            text,
            position: self.start.lerp(self.end, 0.5),
        })
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the connector of the glyph built for `ring`.
///
/// `center` is that glyph's center and `glyph_centers` maps every residue
/// that received a glyph in the same pass to its center.
pub fn resolve<H: StructureHost + ?Sized>(
    host: &H,
    ring: &DetectedRing,
    center: DVec3,
    glyph_centers: &FxHashMap<ResidueId, DVec3>,
    style: &ConnectorStyle,
) -> Result<Connector, SnfgError> {
    let anchor = atom_view(host, ring.anchor)?;
    let neighbors: Vec<AtomView<'_>> = host
        .atom_neighbors(ring.anchor)
        .into_iter()
        .map(|atom| atom_view(host, atom))
        .collect::<Result<_, _>>()?;

    let ring_oxygen = ring.shift.ring_oxygen_name();
    let oxygen = neighbors.iter().find(|n| {
        n.element == Element::O
            && n.residue != ring.residue
            && n.name != ring_oxygen
    });
    let nitrogen = neighbors.iter().find(|n| n.element == Element::N);

    let (kind, end, target, label) = if let Some(oxygen) = oxygen {
        o_linkage(host, ring, oxygen, glyph_centers)?
    } else if let Some(nitrogen) = nitrogen {
        let ca = host
            .find_residue_atom(nitrogen.residue, ALPHA_CARBON)
            .ok_or(SnfgError::MissingAlphaCarbon {
                residue: nitrogen.residue,
            })?;
        (LinkageKind::NLinked, atom_view(host, ca)?.coord, None, None)
    } else {
        let outward = unit(
            anchor.coord - center,
            "anchor atom coincides with glyph center",
        )?;
        let end = anchor.coord + outward * TERMINAL_OFFSET;
        (LinkageKind::Terminal, end, None, None)
    };

    let (sphere_radius, cylinder_radius) = style.radii(kind);
    Ok(Connector {
        kind,
        residue: ring.residue,
        start: center,
        end,
        sphere_radius,
        cylinder_radius,
        target,
        label,
    })
}

type Resolved = (LinkageKind, DVec3, Option<ResidueId>, Option<String>);

/// Classify an attachment through the anomeric oxygen `oxygen`.
fn o_linkage<H: StructureHost + ?Sized>(
    host: &H,
    ring: &DetectedRing,
    oxygen: &AtomView<'_>,
    glyph_centers: &FxHashMap<ResidueId, DVec3>,
) -> Result<Resolved, SnfgError> {
    let mut carbon = None;
    for atom in host.atom_neighbors(oxygen.id) {
        let view = atom_view(host, atom)?;
        if view.element == Element::C && view.residue != ring.residue {
            carbon = Some(view);
            break;
        }
    }
    let Some(carbon) = carbon else {
        return Ok((LinkageKind::ReducingEnd, oxygen.coord, None, None));
    };

    if let Some(&other) = glyph_centers
        .get(&carbon.residue)
        .filter(|_| carbon.residue != ring.residue)
    {
        return Ok((
            LinkageKind::InterGlyph,
            other,
            Some(carbon.residue),
            Some(carbon.name.to_owned()),
        ));
    }

    match host.find_residue_atom(carbon.residue, ALPHA_CARBON) {
        Some(ca) => {
            Ok((LinkageKind::OLinked, atom_view(host, ca)?.coord, None, None))
        }
        None => Ok((LinkageKind::GlycamCap, oxygen.coord, None, None)),
    }
}
