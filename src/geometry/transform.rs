//! Vector helpers shared by the shape constructors.

use glam::{DMat4, DVec3};

use crate::error::SnfgError;

/// Normalise `v`, failing on zero-length or non-finite vectors.
pub fn unit(v: DVec3, what: &'static str) -> Result<DVec3, SnfgError> {
    v.try_normalize().ok_or(SnfgError::DegenerateGeometry(what))
}

/// Homogeneous transform that rotates by `degrees` around the axis
/// `(a - b) × (b - c)` passing through `b`.
///
/// Composed as `T(b) · R(axis, δ) · T(-b)`.
pub fn axis_rotation(
    a: DVec3,
    b: DVec3,
    c: DVec3,
    degrees: f64,
) -> Result<DMat4, SnfgError> {
    let axis = unit((a - b).cross(b - c), "zero-length rotation axis")?;
    Ok(DMat4::from_translation(b)
        * DMat4::from_axis_angle(axis, degrees.to_radians())
        * DMat4::from_translation(-b))
}

/// Rotate the offset vector `offset` with [`axis_rotation`].
///
/// The offset is applied with `w = 0`, so only the rotational part of the
/// transform acts on it; callers add the pivot back themselves.
pub fn rotate(
    a: DVec3,
    b: DVec3,
    c: DVec3,
    degrees: f64,
    offset: DVec3,
) -> Result<DVec3, SnfgError> {
    Ok(axis_rotation(a, b, c, degrees)?.transform_vector3(offset))
}

/// Rotate `offset` by each angle in `angles` and translate the results to
/// `pivot`.
pub fn rotate_ring(
    (a, b, c): (DVec3, DVec3, DVec3),
    angles: &[f64],
    offset: DVec3,
    pivot: DVec3,
) -> Result<Vec<DVec3>, SnfgError> {
    angles
        .iter()
        .map(|&alpha| Ok(rotate(a, b, c, alpha, offset)? + pivot))
        .collect()
}
