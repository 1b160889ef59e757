// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `vec4` provider

use crate::geometry::vec4::{self, Vec4};
use crate::geometry::Vec3;
use crate::harness::{
    check, check_all_approx, check_approx, check_some, CaseResult, TestCaseCollection, UnitCase,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_add_sub", add_sub),
            UnitCase::new("test_dot", dot),
            UnitCase::new("test_len", len),
            UnitCase::new("test_normalize", normalize),
            UnitCase::new("test_homogeneous", homogeneous),
        ]
    }
}

fn add_sub() -> CaseResult {
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let b = Vec4::new(4.0, 3.0, 2.0, 1.0);
    check_all_approx((a + b).as_slice(), &[5.0; 4])?;
    check_all_approx((a - b).as_slice(), &[-3.0, -1.0, 1.0, 3.0])?;
    check_all_approx((a / 2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0])
}

fn dot() -> CaseResult {
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    check_approx(a.dot(&Vec4::new(4.0, 3.0, 2.0, 1.0)), 20.0)?;
    check_approx(a.dot(&Vec4::zeros()), 0.0)
}

fn len() -> CaseResult {
    check_approx(Vec4::new(1.0, 1.0, 1.0, 1.0).norm(), 2.0)?;
    check_approx(Vec4::new(0.0, 3.0, 0.0, 4.0).norm(), 5.0)
}

fn normalize() -> CaseResult {
    let n = check_some(Vec4::new(2.0, 2.0, 2.0, 2.0).try_normalize(1e-12), "unit vector")?;
    check_all_approx(n.as_slice(), &[0.5; 4])?;
    check_approx(n.norm(), 1.0)
}

fn homogeneous() -> CaseResult {
    let p = Vec3::new(1.0, -2.0, 3.0);
    check_all_approx(vec4::from_point(&p).as_slice(), &[1.0, -2.0, 3.0, 1.0])?;
    check_all_approx(vec4::from_direction(&p).as_slice(), &[1.0, -2.0, 3.0, 0.0])?;

    let back = check_some(vec4::homogenize(&Vec4::new(2.0, 4.0, 6.0, 2.0)), "projected point")?;
    check_all_approx(back.as_slice(), &[1.0, 2.0, 3.0])?;
    check(
        vec4::homogenize(&vec4::from_direction(&p)).is_none(),
        "direction must not project to a point",
    )
}
