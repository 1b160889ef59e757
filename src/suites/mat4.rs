// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `mat4` provider

use crate::geometry::mat4::{self, Mat4};
use crate::geometry::{Vec3, Vec4};
use crate::harness::{
    check, check_all_approx, check_approx, check_some, CaseResult, TestCaseCollection, UnitCase,
};
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_identity", identity),
            UnitCase::new("test_mul_vec", mul_vec),
            UnitCase::new("test_transpose", transpose),
            UnitCase::new("test_determinant", determinant),
            UnitCase::new("test_inverse", inverse),
            UnitCase::new("test_translation", translation),
            UnitCase::new("test_rotation", rotation),
        ]
    }
}

fn identity() -> CaseResult {
    let t = mat4::translation(&Vec3::new(1.0, 2.0, 3.0));
    check_all_approx((Mat4::identity() * t).as_slice(), t.as_slice())?;
    check_approx(Mat4::identity().trace(), 4.0)
}

fn mul_vec() -> CaseResult {
    let s = mat4::scale(&Vec3::new(2.0, 3.0, 4.0));
    let v = s * Vec4::new(1.0, 1.0, 1.0, 1.0);
    check_all_approx(v.as_slice(), &[2.0, 3.0, 4.0, 1.0])
}

fn transpose() -> CaseResult {
    let t = mat4::translation(&Vec3::new(1.0, 2.0, 3.0)).transpose();
    check_all_approx(&[t[(3, 0)], t[(3, 1)], t[(3, 2)], t[(3, 3)]], &[1.0, 2.0, 3.0, 1.0])?;
    check_all_approx(&[t[(0, 3)], t[(1, 3)], t[(2, 3)]], &[0.0, 0.0, 0.0])
}

fn determinant() -> CaseResult {
    check_approx(mat4::scale(&Vec3::new(2.0, 3.0, 4.0)).determinant(), 24.0)?;
    check_approx(mat4::translation(&Vec3::new(5.0, -1.0, 2.0)).determinant(), 1.0)
}

fn inverse() -> CaseResult {
    let d = Vec3::new(1.0, -2.0, 3.0);
    let inv = check_some(mat4::inverse(&mat4::translation(&d)), "inverse")?;
    check_all_approx(inv.as_slice(), mat4::translation(&-d).as_slice())?;

    let m = mat4::translation(&d) * mat4::scale(&Vec3::new(2.0, 2.0, 2.0));
    let inv = check_some(mat4::inverse(&m), "inverse")?;
    check_all_approx((m * inv).as_slice(), Mat4::identity().as_slice())?;

    check(
        mat4::inverse(&mat4::scale(&Vec3::new(1.0, 0.0, 1.0))).is_none(),
        "flattening scale must not invert",
    )
}

fn translation() -> CaseResult {
    let m = mat4::translation(&Vec3::new(1.0, 2.0, 3.0));
    let p = check_some(mat4::transform_point(&m, &Vec3::new(1.0, 1.0, 1.0)), "point")?;
    check_all_approx(p.as_slice(), &[2.0, 3.0, 4.0])?;

    // directions ignore translation
    let d = mat4::transform_direction(&m, &Vec3::new(1.0, 1.0, 1.0));
    check_all_approx(d.as_slice(), &[1.0, 1.0, 1.0])
}

fn rotation() -> CaseResult {
    let rz = check_some(mat4::rotation(&Vec3::z(), FRAC_PI_2), "rotation")?;
    let p = check_some(mat4::transform_point(&rz, &Vec3::x()), "point")?;
    check_all_approx(p.as_slice(), &[0.0, 1.0, 0.0])?;

    let rx = check_some(mat4::rotation(&Vec3::new(3.0, 0.0, 0.0), PI), "rotation")?;
    let d = mat4::transform_direction(&rx, &Vec3::y());
    check_all_approx(d.as_slice(), &[0.0, -1.0, 0.0])?;
    check_approx(rx.determinant(), 1.0)?;

    check(mat4::rotation(&Vec3::zeros(), 1.0).is_none(), "zero axis must not rotate")
}
