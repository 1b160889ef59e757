// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Spatial vectors and triangle/segment queries

use super::Real;
use crate::utils::math::{clamp, EPS};
use nalgebra::Vector3;

/// 3D vector
pub type Vec3 = Vector3<Real>;

/// Squared distance from `p` to the segment `ab` together with the closest
/// point of the segment (the witness).
pub fn point_segment_dist2(p: &Vec3, a: &Vec3, b: &Vec3) -> (Real, Vec3) {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= EPS {
        return ((p - a).norm_squared(), *a);
    }

    let t = clamp((p - a).dot(&ab) / len2, 0.0, 1.0);
    let witness = a + ab * t;
    ((p - witness).norm_squared(), witness)
}

/// Area of triangle `abc`
pub fn triangle_area(a: &Vec3, b: &Vec3, c: &Vec3) -> Real {
    (b - a).cross(&(c - a)).norm() * 0.5
}

/// Unit normal of triangle `abc` following the right-hand rule, `None` for
/// degenerate triangles.
pub fn triangle_normal(a: &Vec3, b: &Vec3, c: &Vec3) -> Option<Vec3> {
    (b - a).cross(&(c - a)).try_normalize(EPS)
}

/// Check whether `p` lies in the plane of triangle `abc` and inside it
/// (boundary included).
pub fn point_in_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let normal = v1.cross(&v0);
    let normal_len = normal.norm();
    if normal_len <= EPS || normal.dot(&v2).abs() > EPS * normal_len.max(1.0) {
        return false;
    }

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u >= -EPS && v >= -EPS && u + v <= 1.0 + EPS
}
