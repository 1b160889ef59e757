// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 4x4 matrices and spatial homogeneous transforms

use super::{vec4, Real, Vec3};
use crate::utils::math::is_zero;
use nalgebra::Matrix4;

/// 4x4 matrix
pub type Mat4 = Matrix4<Real>;

/// Inverse, `None` for singular matrices
pub fn inverse(m: &Mat4) -> Option<Mat4> {
    if is_zero(m.determinant()) {
        return None;
    }
    m.try_inverse()
}

pub fn translation(d: &Vec3) -> Mat4 {
    Mat4::new(
        1.0, 0.0, 0.0, d.x,
        0.0, 1.0, 0.0, d.y,
        0.0, 0.0, 1.0, d.z,
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn scale(s: &Vec3) -> Mat4 {
    Mat4::new(
        s.x, 0.0, 0.0, 0.0,
        0.0, s.y, 0.0, 0.0,
        0.0, 0.0, s.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation by `angle` radians about `axis` (Rodrigues' formula).
/// Returns `None` for a zero axis.
pub fn rotation(axis: &Vec3, angle: Real) -> Option<Mat4> {
    let axis = axis.try_normalize(crate::utils::math::EPS)?;
    let (x, y, z) = (axis.x, axis.y, axis.z);
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    Some(Mat4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    ))
}

/// Apply a transform to a point
pub fn transform_point(m: &Mat4, p: &Vec3) -> Option<Vec3> {
    vec4::homogenize(&(m * vec4::from_point(p)))
}

/// Apply a transform to a direction (translation is ignored)
pub fn transform_direction(m: &Mat4, d: &Vec3) -> Vec3 {
    let h = m * vec4::from_direction(d);
    Vec3::new(h.x, h.y, h.z)
}
