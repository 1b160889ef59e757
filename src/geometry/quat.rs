// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quaternions used as rotations

use super::{mat3, Mat3, Real, Vec3};
use crate::utils::math::EPS;
use nalgebra::Quaternion;

/// Quaternion `w + xi + yj + zk`
pub type Quat = Quaternion<Real>;

/// Build from components in `x, y, z, w` order
pub fn from_xyzw(x: Real, y: Real, z: Real, w: Real) -> Quat {
    Quat::new(w, x, y, z)
}

/// Unit quaternion rotating by `angle` radians about `axis`.
/// Returns `None` for a zero axis.
pub fn from_axis_angle(axis: &Vec3, angle: Real) -> Option<Quat> {
    let axis = axis.try_normalize(EPS)?;
    let half = angle * 0.5;
    Some(Quat::from_parts(half.cos(), axis * half.sin()))
}

/// Multiplicative inverse, `None` for the zero quaternion
pub fn inverse(q: &Quat) -> Option<Quat> {
    if q.norm_squared() <= EPS {
        return None;
    }
    q.try_inverse()
}

/// Rotate `v` by `q` (`q v q^-1`)
pub fn rotate(q: &Quat, v: &Vec3) -> Option<Vec3> {
    let inv = inverse(q)?;
    Some((q * Quat::from_imag(*v) * inv).imag())
}

/// Rotation matrix of a quaternion, which is normalized first
pub fn to_mat3(q: &Quat) -> Option<Mat3> {
    let q = Quat::from_vector(q.coords.try_normalize(EPS)?);
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);

    Some(mat3::from_rows(
        [1.0 - 2.0 * (y * y + z * z), 2.0 * (x * y - w * z), 2.0 * (x * z + w * y)],
        [2.0 * (x * y + w * z), 1.0 - 2.0 * (x * x + z * z), 2.0 * (y * z - w * x)],
        [2.0 * (x * z - w * y), 2.0 * (y * z + w * x), 1.0 - 2.0 * (x * x + y * y)],
    ))
}
