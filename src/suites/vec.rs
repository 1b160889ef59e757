// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `vec` provider, N-dimensional vectors

use crate::geometry::vecn::{self, VecN};
use crate::harness::{
    check, check_all_approx, check_approx, check_eq, check_some, CaseResult, TestCaseCollection,
    UnitCase,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_construct", construct),
            UnitCase::new("test_set_get", set_get),
            UnitCase::new("test_add_sub", add_sub),
            UnitCase::new("test_constant_ops", constant_ops),
            UnitCase::new("test_scale", scale),
            UnitCase::new("test_dot_len", dot_len),
            UnitCase::new("test_dist", dist),
            UnitCase::new("test_mul_comp", mul_comp),
            UnitCase::new("test_dimension_mismatch", dimension_mismatch),
        ]
    }
}

fn construct() -> CaseResult {
    let z = vecn::zeros(5);
    check_eq(z.len(), 5)?;
    check(z.iter().all(|c| *c == 0.0), "zero vector")?;
    check_all_approx(vecn::filled(3, 1.5).as_slice(), &[1.5, 1.5, 1.5])?;
    check_eq(vecn::zeros(0).len(), 0)
}

fn set_get() -> CaseResult {
    let mut v = vecn::zeros(3);
    v[1] = 3.0;
    check_approx(v[1], 3.0)?;
    check_all_approx(v.as_slice(), &[0.0, 3.0, 0.0])?;
    check(v.get(3).is_none(), "out of range index")
}

fn add_sub() -> CaseResult {
    let a = VecN::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    let b = VecN::from_vec(vec![4.0, 3.0, 2.0, 1.0]);
    let sum = check_some(vecn::checked_add(&a, &b), "sum")?;
    check_all_approx(sum.as_slice(), &[5.0; 4])?;
    let diff = check_some(vecn::checked_sub(&a, &b), "difference")?;
    check_all_approx(diff.as_slice(), &[-3.0, -1.0, 1.0, 3.0])
}

fn constant_ops() -> CaseResult {
    let v = VecN::from_vec(vec![1.0, 2.0]);
    check_all_approx(vecn::add_const(&v, 0.5).as_slice(), &[1.5, 2.5])?;
    check_all_approx(vecn::sub_const(&v, 1.0).as_slice(), &[0.0, 1.0])
}

fn scale() -> CaseResult {
    let v = VecN::from_vec(vec![1.0, -2.0, 3.0]);
    check_all_approx((&v * 2.0).as_slice(), &[2.0, -4.0, 6.0])?;
    check_all_approx((v / 2.0).as_slice(), &[0.5, -1.0, 1.5])
}

fn dot_len() -> CaseResult {
    let a = VecN::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    check_approx(check_some(vecn::checked_dot(&a, &a), "dot product")?, 55.0)?;
    check_approx(VecN::from_vec(vec![1.0, 1.0, 1.0, 1.0]).norm(), 2.0)
}

fn dist() -> CaseResult {
    let a = VecN::from_vec(vec![0.0, 0.0, 0.0, 0.0]);
    let b = VecN::from_vec(vec![1.0, 1.0, 1.0, 1.0]);
    check_approx(check_some(vecn::dist(&a, &b), "distance")?, 2.0)?;
    check_approx(check_some(vecn::dist(&b, &b), "distance")?, 0.0)
}

fn mul_comp() -> CaseResult {
    let a = VecN::from_vec(vec![1.0, 2.0, 3.0]);
    let b = VecN::from_vec(vec![4.0, 5.0, 6.0]);
    let p = check_some(vecn::checked_mul_comp(&a, &b), "product")?;
    check_all_approx(p.as_slice(), &[4.0, 10.0, 18.0])
}

fn dimension_mismatch() -> CaseResult {
    let a = vecn::zeros(2);
    let b = vecn::zeros(3);
    check(vecn::checked_add(&a, &b).is_none(), "add across dimensions")?;
    check(vecn::checked_sub(&a, &b).is_none(), "sub across dimensions")?;
    check(vecn::checked_dot(&a, &b).is_none(), "dot across dimensions")?;
    check(vecn::checked_mul_comp(&a, &b).is_none(), "mul_comp across dimensions")?;
    check(vecn::dist(&a, &b).is_none(), "dist across dimensions")
}
