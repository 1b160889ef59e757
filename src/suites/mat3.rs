// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `mat3` provider

use crate::geometry::mat3::{self, Mat3};
use crate::geometry::{Vec2, Vec3};
use crate::harness::{
    check, check_all_approx, check_approx, check_some, CaseResult, TestCaseCollection, UnitCase,
};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_identity", identity),
            UnitCase::new("test_mul", mul),
            UnitCase::new("test_mul_vec", mul_vec),
            UnitCase::new("test_transpose", transpose),
            UnitCase::new("test_determinant", determinant),
            UnitCase::new("test_inverse", inverse),
            UnitCase::new("test_planar_transforms", planar_transforms),
        ]
    }
}

fn sample() -> Mat3 {
    mat3::from_rows([1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
}

fn identity() -> CaseResult {
    let m = sample();
    check_all_approx((Mat3::identity() * m).as_slice(), m.as_slice())?;
    check_all_approx((m * Mat3::identity()).as_slice(), m.as_slice())
}

fn mul() -> CaseResult {
    let b = mat3::from_rows([1.0, 0.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    let expected = mat3::from_rows([7.0, 2.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    check_all_approx((sample() * b).as_slice(), expected.as_slice())
}

fn mul_vec() -> CaseResult {
    let v = sample() * Vec3::new(1.0, 1.0, 1.0);
    check_all_approx(v.as_slice(), &[3.0, 1.0, 1.0])
}

fn transpose() -> CaseResult {
    let t = sample().transpose();
    let expected = mat3::from_rows([1.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    check_all_approx(t.as_slice(), expected.as_slice())?;
    check_all_approx(t.transpose().as_slice(), sample().as_slice())
}

fn determinant() -> CaseResult {
    let m = mat3::from_rows([2.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]);
    check_approx(m.determinant(), 1.0)?;
    check_approx(mat3::scale2(2.0, 3.0).determinant(), 6.0)
}

fn inverse() -> CaseResult {
    let m = mat3::from_rows([2.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]);
    let inv = check_some(mat3::inverse(&m), "inverse")?;
    check_all_approx((m * inv).as_slice(), Mat3::identity().as_slice())?;

    let singular = mat3::from_rows([1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]);
    check(mat3::inverse(&singular).is_none(), "singular matrix must not invert")
}

fn planar_transforms() -> CaseResult {
    let p = Vec2::new(1.0, 0.0);

    let moved = check_some(mat3::transform_point2(&mat3::translation2(2.0, 3.0), &p), "point")?;
    check_all_approx(moved.as_slice(), &[3.0, 3.0])?;

    let scaled = check_some(mat3::transform_point2(&mat3::scale2(2.0, 5.0), &p), "point")?;
    check_all_approx(scaled.as_slice(), &[2.0, 0.0])?;

    let rotated = check_some(mat3::transform_point2(&mat3::rotation2(FRAC_PI_2), &p), "point")?;
    check_all_approx(rotated.as_slice(), &[0.0, 1.0])?;

    let combined = mat3::translation2(1.0, 0.0) * mat3::rotation2(FRAC_PI_2);
    let both = check_some(mat3::transform_point2(&combined, &p), "point")?;
    check_all_approx(both.as_slice(), &[1.0, 1.0])
}
