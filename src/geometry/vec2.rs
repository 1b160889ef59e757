// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Planar vectors and the predicates built on them

use super::Real;
use crate::utils::math::{clamp, is_zero, EPS};
use nalgebra::Vector2;

/// 2D vector
pub type Vec2 = Vector2<Real>;

/// Twice the signed area of triangle `abc`.
///
/// Positive when the vertices wind counter-clockwise, negative when they
/// wind clockwise and zero (within [`EPS`]) when they are collinear.
pub fn area2(a: &Vec2, b: &Vec2, c: &Vec2) -> Real {
    let u = b - a;
    let v = c - a;
    u.x * v.y - u.y * v.x
}

/// Unsigned area of triangle `abc`
pub fn triangle_area(a: &Vec2, b: &Vec2, c: &Vec2) -> Real {
    area2(a, b, c).abs() * 0.5
}

/// Angle in radians between two vectors, `None` if either is zero
pub fn angle(a: &Vec2, b: &Vec2) -> Option<Real> {
    let lens = a.norm() * b.norm();
    if is_zero(lens) {
        return None;
    }
    Some(clamp(a.dot(b) / lens, -1.0, 1.0).acos())
}

/// Check whether the closed segments `a1a2` and `b1b2` share a point
pub fn segments_intersect(a1: &Vec2, a2: &Vec2, b1: &Vec2, b2: &Vec2) -> bool {
    let d1 = area2(b1, b2, a1);
    let d2 = area2(b1, b2, a2);
    let d3 = area2(a1, a2, b1);
    let d4 = area2(a1, a2, b2);

    if opposite_sides(d1, d2) && opposite_sides(d3, d4) {
        return true;
    }

    (is_zero(d1) && within_bounds(b1, b2, a1))
        || (is_zero(d2) && within_bounds(b1, b2, a2))
        || (is_zero(d3) && within_bounds(a1, a2, b1))
        || (is_zero(d4) && within_bounds(a1, a2, b2))
}

fn opposite_sides(d1: Real, d2: Real) -> bool {
    (d1 > EPS && d2 < -EPS) || (d1 < -EPS && d2 > EPS)
}

// `r` is assumed collinear with `pq`
fn within_bounds(p: &Vec2, q: &Vec2, r: &Vec2) -> bool {
    r.x >= p.x.min(q.x) - EPS
        && r.x <= p.x.max(q.x) + EPS
        && r.y >= p.y.min(q.y) - EPS
        && r.y <= p.y.max(q.y) + EPS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area2_orientation() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        let c = Vec2::new(0.0, 1.0);

        assert_relative_eq!(area2(&a, &b, &c), 1.0);
        assert_relative_eq!(area2(&a, &c, &b), -1.0);
        assert_relative_eq!(triangle_area(&a, &c, &b), 0.5);
    }

    #[test]
    fn test_angle() {
        let x = Vec2::new(2.0, 0.0);
        let y = Vec2::new(0.0, 3.0);
        assert_relative_eq!(angle(&x, &y).unwrap(), std::f64::consts::FRAC_PI_2);
        assert!(angle(&x, &Vec2::zeros()).is_none());
    }

    #[test]
    fn test_segments() {
        let o = Vec2::new(0.0, 0.0);
        let p = Vec2::new(2.0, 2.0);
        assert!(segments_intersect(&o, &p, &Vec2::new(0.0, 2.0), &Vec2::new(2.0, 0.0)));
        assert!(!segments_intersect(&o, &p, &Vec2::new(3.0, 0.0), &Vec2::new(4.0, 1.0)));
        // touching at an endpoint
        assert!(segments_intersect(&o, &p, &p, &Vec2::new(3.0, 0.0)));
        // collinear but disjoint
        assert!(!segments_intersect(&o, &Vec2::new(1.0, 1.0), &p, &Vec2::new(3.0, 3.0)));
    }
}
