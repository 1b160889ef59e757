// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Dynamically sized vectors
//!
//! Binary operations check that both operands share a dimension and return
//! `None` otherwise instead of panicking.

use super::Real;
use nalgebra::DVector;

/// N-dimensional vector
pub type VecN = DVector<Real>;

/// Zero vector of dimension `size`
pub fn zeros(size: usize) -> VecN {
    VecN::zeros(size)
}

/// Vector of dimension `size` with every component set to `value`
pub fn filled(size: usize, value: Real) -> VecN {
    VecN::from_element(size, value)
}

pub fn checked_add(a: &VecN, b: &VecN) -> Option<VecN> {
    same_dim(a, b).then(|| a + b)
}

pub fn checked_sub(a: &VecN, b: &VecN) -> Option<VecN> {
    same_dim(a, b).then(|| a - b)
}

pub fn checked_dot(a: &VecN, b: &VecN) -> Option<Real> {
    same_dim(a, b).then(|| a.dot(b))
}

/// Component-wise product
pub fn checked_mul_comp(a: &VecN, b: &VecN) -> Option<VecN> {
    same_dim(a, b).then(|| a.component_mul(b))
}

/// Euclidean distance between two points
pub fn dist(a: &VecN, b: &VecN) -> Option<Real> {
    same_dim(a, b).then(|| (a - b).norm())
}

/// Add a constant to every component
pub fn add_const(v: &VecN, value: Real) -> VecN {
    v.add_scalar(value)
}

/// Subtract a constant from every component
pub fn sub_const(v: &VecN, value: Real) -> VecN {
    v.add_scalar(-value)
}

fn same_dim(a: &VecN, b: &VecN) -> bool {
    a.len() == b.len()
}
