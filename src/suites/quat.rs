// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `quat` provider

use crate::geometry::quat::{self, Quat};
use crate::geometry::{Mat3, Vec3};
use crate::harness::{
    check, check_all_approx, check_approx, check_some, CaseResult, TestCaseCollection, UnitCase,
};
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_mul", mul),
            UnitCase::new("test_conjugate", conjugate),
            UnitCase::new("test_len", len),
            UnitCase::new("test_inverse", inverse),
            UnitCase::new("test_axis_angle", axis_angle),
            UnitCase::new("test_rotate", rotate),
            UnitCase::new("test_to_mat3", to_mat3),
        ]
    }
}

fn mul() -> CaseResult {
    let i = quat::from_xyzw(1.0, 0.0, 0.0, 0.0);
    let j = quat::from_xyzw(0.0, 1.0, 0.0, 0.0);
    check_all_approx((i * j).coords.as_slice(), &[0.0, 0.0, 1.0, 0.0])?;
    check_all_approx((j * i).coords.as_slice(), &[0.0, 0.0, -1.0, 0.0])?;

    let q = quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
    check_all_approx((q * Quat::identity()).coords.as_slice(), q.coords.as_slice())
}

fn conjugate() -> CaseResult {
    let q = quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
    check_all_approx(q.conjugate().coords.as_slice(), &[-1.0, -2.0, -3.0, 4.0])
}

fn len() -> CaseResult {
    check_approx(quat::from_xyzw(0.0, 0.0, 3.0, 4.0).norm(), 5.0)?;
    let n = quat::from_xyzw(0.0, 0.0, 3.0, 4.0).normalize();
    check_approx(n.norm(), 1.0)?;
    check_all_approx(n.coords.as_slice(), &[0.0, 0.0, 0.6, 0.8])
}

fn inverse() -> CaseResult {
    let q = quat::from_xyzw(1.0, 2.0, 3.0, 4.0);
    let inv = check_some(quat::inverse(&q), "inverse")?;
    check_all_approx((q * inv).coords.as_slice(), Quat::identity().coords.as_slice())?;
    check(
        quat::inverse(&Quat::new(0.0, 0.0, 0.0, 0.0)).is_none(),
        "zero quaternion must not invert",
    )
}

fn axis_angle() -> CaseResult {
    let q = check_some(quat::from_axis_angle(&Vec3::new(0.0, 0.0, 2.0), PI), "rotation")?;
    check_all_approx(q.coords.as_slice(), &[0.0, 0.0, 1.0, 0.0])?;
    check_approx(q.norm(), 1.0)?;
    check(quat::from_axis_angle(&Vec3::zeros(), 1.0).is_none(), "zero axis must not rotate")
}

fn rotate() -> CaseResult {
    let qz = check_some(quat::from_axis_angle(&Vec3::z(), FRAC_PI_2), "rotation")?;
    let v = check_some(quat::rotate(&qz, &Vec3::x()), "rotated vector")?;
    check_all_approx(v.as_slice(), &[0.0, 1.0, 0.0])?;

    // a non-unit quaternion rotates the same way as its normalization
    let scaled = qz * 3.0;
    let w = check_some(quat::rotate(&scaled, &Vec3::x()), "rotated vector")?;
    check_all_approx(w.as_slice(), v.as_slice())?;

    let qx = check_some(quat::from_axis_angle(&Vec3::x(), PI), "rotation")?;
    let u = check_some(quat::rotate(&qx, &Vec3::y()), "rotated vector")?;
    check_all_approx(u.as_slice(), &[0.0, -1.0, 0.0])
}

fn to_mat3() -> CaseResult {
    let identity = check_some(quat::to_mat3(&Quat::identity()), "matrix")?;
    check_all_approx(identity.as_slice(), Mat3::identity().as_slice())?;

    let qz = check_some(quat::from_axis_angle(&Vec3::z(), FRAC_PI_2), "rotation")?;
    let m = check_some(quat::to_mat3(&qz), "matrix")?;
    check_all_approx((m * Vec3::x()).as_slice(), &[0.0, 1.0, 0.0])?;
    check_approx(m.determinant(), 1.0)?;
    check(
        quat::to_mat3(&Quat::new(0.0, 0.0, 0.0, 0.0)).is_none(),
        "zero quaternion has no rotation",
    )
}
