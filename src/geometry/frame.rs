//! Orientation frame shared by the shape constructors.
//!
//! Every glyph is laid out around a spine: two points on the line from the
//! glyph center `C` toward the facing point `A`, one in front of and one
//! behind the center. A perpendicular derived from the spine and the
//! reference point `R` then spans a square (`o1..o4`) whose plane fixes the
//! glyph's roll around the spine.

use glam::DVec3;

use super::transform::unit;
use crate::error::SnfgError;

/// Spine points and the square spanned around them.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Spine point toward the facing point.
    pub x1: DVec3,
    /// Spine point away from the facing point.
    pub x2: DVec3,
    /// `x1 + perp`.
    pub o1: DVec3,
    /// `x2 + perp`.
    pub o2: DVec3,
    /// `x1 - perp`.
    pub o3: DVec3,
    /// `x2 - perp`.
    pub o4: DVec3,
}

/// Spine points at `forward` ahead of and `backward` behind `center` along
/// `center → facing`.
pub fn spine(
    center: DVec3,
    facing: DVec3,
    forward: f64,
    backward: f64,
) -> Result<(DVec3, DVec3), SnfgError> {
    let along = facing - center;
    let distance = center.distance(facing);
    if distance == 0.0 || !distance.is_finite() {
        return Err(SnfgError::DegenerateGeometry(
            "facing point coincides with glyph center",
        ));
    }
    let x1 = center + along * (forward / distance);
    let x2 = center - along * (backward / distance);
    Ok((x1, x2))
}

/// Raw (unnormalised) perpendicular `(x1 - x2) × (x2 - reference)`.
#[must_use]
pub fn raw_perpendicular(x1: DVec3, x2: DVec3, reference: DVec3) -> DVec3 {
    (x1 - x2).cross(x2 - reference)
}

/// Unit perpendicular to the spine, rolled by `reference`.
pub fn perpendicular(
    x1: DVec3,
    x2: DVec3,
    reference: DVec3,
) -> Result<DVec3, SnfgError> {
    unit(
        raw_perpendicular(x1, x2, reference),
        "reference point lies on the glyph spine",
    )
}

impl Frame {
    /// Square around the spine offset by `perp` on either side.
    #[must_use]
    pub fn around(x1: DVec3, x2: DVec3, perp: DVec3) -> Self {
        Self {
            x1,
            x2,
            o1: x1 + perp,
            o2: x2 + perp,
            o3: x1 - perp,
            o4: x2 - perp,
        }
    }

    /// Symmetric spine of half length `half` with a square of the same half
    /// width, the layout most shapes start from.
    pub fn square(
        center: DVec3,
        facing: DVec3,
        reference: DVec3,
        half: f64,
    ) -> Result<Self, SnfgError> {
        let (x1, x2) = spine(center, facing, half, half)?;
        let perp = perpendicular(x1, x2, reference)? * half;
        Ok(Self::around(x1, x2, perp))
    }

    /// Unit normal of the square's plane.
    pub fn normal(&self) -> Result<DVec3, SnfgError> {
        unit(
            (self.o1 - self.o2).cross(self.o3 - self.o1),
            "glyph frame has no area",
        )
    }

    /// Rotation axis points for spinning offsets around `pivot` in the
    /// square's plane.
    #[must_use]
    pub fn in_plane_axis(&self, pivot: DVec3) -> (DVec3, DVec3, DVec3) {
        (self.o1, pivot, self.o2)
    }
}
