// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `vec2` provider

use crate::geometry::vec2::{self, Vec2};
use crate::harness::{
    check, check_all_approx, check_approx, check_some, CaseResult, TestCaseCollection, UnitCase,
};
use std::f64::consts::{FRAC_PI_4, PI};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_add_sub", add_sub),
            UnitCase::new("test_dot_len", dot_len),
            UnitCase::new("test_normalize", normalize),
            UnitCase::new("test_dist", dist),
            UnitCase::new("test_area", area),
            UnitCase::new("test_angle", angle),
            UnitCase::new("test_segment_intersection", segment_intersection),
        ]
    }
}

fn add_sub() -> CaseResult {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, -1.0);
    check_all_approx((a + b).as_slice(), &[4.0, 1.0])?;
    check_all_approx((a - b).as_slice(), &[-2.0, 3.0])?;
    check_all_approx((a * 2.0).as_slice(), &[2.0, 4.0])
}

fn dot_len() -> CaseResult {
    check_approx(Vec2::new(1.0, 2.0).dot(&Vec2::new(3.0, -1.0)), 1.0)?;
    check_approx(Vec2::new(3.0, 4.0).norm(), 5.0)?;
    check_approx(Vec2::new(3.0, 4.0).norm_squared(), 25.0)
}

fn normalize() -> CaseResult {
    let n = Vec2::new(3.0, 4.0).normalize();
    check_all_approx(n.as_slice(), &[0.6, 0.8])?;
    check_approx(n.norm(), 1.0)
}

fn dist() -> CaseResult {
    check_approx((Vec2::new(3.0, 4.0) - Vec2::zeros()).norm(), 5.0)?;
    check_approx((Vec2::new(1.0, 1.0) - Vec2::new(1.0, 1.0)).norm(), 0.0)
}

fn area() -> CaseResult {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(2.0, 0.0);
    let c = Vec2::new(0.0, 2.0);
    check_approx(vec2::area2(&a, &b, &c), 4.0)?;
    check_approx(vec2::area2(&a, &c, &b), -4.0)?;
    check_approx(vec2::triangle_area(&a, &c, &b), 2.0)?;
    check_approx(vec2::area2(&a, &b, &Vec2::new(5.0, 0.0)), 0.0)
}

fn angle() -> CaseResult {
    let x = Vec2::new(1.0, 0.0);
    check_approx(check_some(vec2::angle(&x, &Vec2::new(1.0, 1.0)), "angle")?, FRAC_PI_4)?;
    check_approx(check_some(vec2::angle(&x, &Vec2::new(-3.0, 0.0)), "angle")?, PI)?;
    check(vec2::angle(&x, &Vec2::zeros()).is_none(), "angle with zero vector must be undefined")
}

fn segment_intersection() -> CaseResult {
    let o = Vec2::new(0.0, 0.0);
    let p = Vec2::new(2.0, 2.0);
    check(
        vec2::segments_intersect(&o, &p, &Vec2::new(0.0, 2.0), &Vec2::new(2.0, 0.0)),
        "crossing diagonals must intersect",
    )?;
    check(
        !vec2::segments_intersect(&o, &p, &Vec2::new(0.0, 1.0), &Vec2::new(1.0, 2.0)),
        "parallel segments must not intersect",
    )?;
    check(
        vec2::segments_intersect(&o, &p, &Vec2::new(1.0, 1.0), &Vec2::new(3.0, 3.0)),
        "overlapping collinear segments must intersect",
    )
}
