// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Homogeneous 4D vectors

use super::{Real, Vec3};
use crate::utils::math::is_zero;
use nalgebra::Vector4;

/// 4D vector
pub type Vec4 = Vector4<Real>;

/// Lift a point into homogeneous coordinates (`w = 1`)
pub fn from_point(p: &Vec3) -> Vec4 {
    Vec4::new(p.x, p.y, p.z, 1.0)
}

/// Lift a direction into homogeneous coordinates (`w = 0`)
pub fn from_direction(d: &Vec3) -> Vec4 {
    Vec4::new(d.x, d.y, d.z, 0.0)
}

/// Project back to 3D by dividing by `w`; `None` for points at infinity
pub fn homogenize(v: &Vec4) -> Option<Vec3> {
    if is_zero(v.w) {
        return None;
    }
    Some(Vec3::new(v.x / v.w, v.y / v.w, v.z / v.w))
}
