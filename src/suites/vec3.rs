// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `vec3` provider

use crate::geometry::vec3::{self, Vec3};
use crate::harness::{
    check, check_all_approx, check_approx, check_some, CaseResult, TestCaseCollection, UnitCase,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_add_sub", add_sub),
            UnitCase::new("test_dot_cross", dot_cross),
            UnitCase::new("test_len_dist", len_dist),
            UnitCase::new("test_normalize", normalize),
            UnitCase::new("test_point_segment_dist", point_segment_dist),
            UnitCase::new("test_triangle_area", triangle_area),
            UnitCase::new("test_triangle_normal", triangle_normal),
            UnitCase::new("test_point_in_triangle", point_in_triangle),
        ]
    }
}

fn add_sub() -> CaseResult {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    check_all_approx((a + b).as_slice(), &[5.0, 7.0, 9.0])?;
    check_all_approx((b - a).as_slice(), &[3.0, 3.0, 3.0])?;
    check_all_approx((-a * 0.5).as_slice(), &[-0.5, -1.0, -1.5])
}

fn dot_cross() -> CaseResult {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    check_approx(a.dot(&b), 32.0)?;
    check_all_approx(a.cross(&b).as_slice(), &[-3.0, 6.0, -3.0])?;
    check_all_approx(Vec3::x().cross(&Vec3::y()).as_slice(), Vec3::z().as_slice())?;
    check_approx(a.cross(&b).dot(&a), 0.0)
}

fn len_dist() -> CaseResult {
    check_approx(Vec3::new(1.0, 2.0, 2.0).norm(), 3.0)?;
    check_approx(Vec3::new(1.0, 2.0, 2.0).norm_squared(), 9.0)?;
    check_approx((Vec3::new(1.0, 1.0, 1.0) - Vec3::new(1.0, 4.0, 5.0)).norm(), 5.0)
}

fn normalize() -> CaseResult {
    let n = check_some(Vec3::new(0.0, 0.0, 7.0).try_normalize(1e-12), "unit vector")?;
    check_all_approx(n.as_slice(), &[0.0, 0.0, 1.0])?;
    check(Vec3::zeros().try_normalize(1e-12).is_none(), "zero vector must not normalize")
}

fn point_segment_dist() -> CaseResult {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(4.0, 0.0, 0.0);

    let (d2, witness) = vec3::point_segment_dist2(&Vec3::new(2.0, 3.0, 0.0), &a, &b);
    check_approx(d2, 9.0)?;
    check_all_approx(witness.as_slice(), &[2.0, 0.0, 0.0])?;

    // beyond the end the closest point clamps to the endpoint
    let (d2, witness) = vec3::point_segment_dist2(&Vec3::new(6.0, 0.0, 0.0), &a, &b);
    check_approx(d2, 4.0)?;
    check_all_approx(witness.as_slice(), b.as_slice())?;

    let (d2, witness) = vec3::point_segment_dist2(&Vec3::new(0.0, 1.0, 0.0), &a, &a);
    check_approx(d2, 1.0)?;
    check_all_approx(witness.as_slice(), a.as_slice())
}

fn triangle_area() -> CaseResult {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 2.0, 0.0);
    check_approx(vec3::triangle_area(&a, &b, &c), 2.0)?;
    check_approx(vec3::triangle_area(&a, &b, &Vec3::new(5.0, 0.0, 0.0)), 0.0)
}

fn triangle_normal() -> CaseResult {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 1.0, 0.0);
    let n = check_some(vec3::triangle_normal(&a, &b, &c), "normal")?;
    check_all_approx(n.as_slice(), &[0.0, 0.0, 1.0])?;
    let flipped = check_some(vec3::triangle_normal(&a, &c, &b), "normal")?;
    check_all_approx(flipped.as_slice(), &[0.0, 0.0, -1.0])?;
    check(
        vec3::triangle_normal(&a, &b, &(b * 2.0)).is_none(),
        "degenerate triangle must have no normal",
    )
}

fn point_in_triangle() -> CaseResult {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 2.0, 0.0);
    check(vec3::point_in_triangle(&Vec3::new(0.5, 0.5, 0.0), &a, &b, &c), "interior point")?;
    check(vec3::point_in_triangle(&Vec3::new(1.0, 0.0, 0.0), &a, &b, &c), "edge point")?;
    check(!vec3::point_in_triangle(&Vec3::new(2.0, 2.0, 0.0), &a, &b, &c), "outside point")?;
    check(!vec3::point_in_triangle(&Vec3::new(0.5, 0.5, 1.0), &a, &b, &c), "off-plane point")
}
