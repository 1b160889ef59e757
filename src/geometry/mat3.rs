// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 3x3 matrices and planar homogeneous transforms

use super::{Real, Vec2};
use crate::utils::math::is_zero;
use nalgebra::{Matrix3, Vector3};

/// 3x3 matrix
pub type Mat3 = Matrix3<Real>;

/// Matrix from its rows
pub fn from_rows(r0: [Real; 3], r1: [Real; 3], r2: [Real; 3]) -> Mat3 {
    Mat3::new(
        r0[0], r0[1], r0[2],
        r1[0], r1[1], r1[2],
        r2[0], r2[1], r2[2],
    )
}

/// Inverse, `None` for singular matrices
pub fn inverse(m: &Mat3) -> Option<Mat3> {
    if is_zero(m.determinant()) {
        return None;
    }
    m.try_inverse()
}

pub fn translation2(dx: Real, dy: Real) -> Mat3 {
    from_rows([1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0])
}

pub fn scale2(sx: Real, sy: Real) -> Mat3 {
    from_rows([sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0])
}

/// Counter-clockwise rotation by `angle` radians
pub fn rotation2(angle: Real) -> Mat3 {
    let (s, c) = angle.sin_cos();
    from_rows([c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0])
}

/// Apply a homogeneous planar transform to a point
pub fn transform_point2(m: &Mat3, p: &Vec2) -> Option<Vec2> {
    let h = m * Vector3::new(p.x, p.y, 1.0);
    if is_zero(h.z) {
        return None;
    }
    Some(Vec2::new(h.x / h.z, h.y / h.z))
}
