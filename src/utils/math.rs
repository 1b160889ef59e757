// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use crate::geometry::Real;

/// Tolerance used by the geometry predicates and the suite assertions
pub const EPS: Real = 1e-9;

/// Check if two floats are approximately equal
pub fn approx_eq(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Check if a value is zero within [`EPS`]
pub fn is_zero(value: Real) -> bool {
    value.abs() <= EPS
}

/// Clamp a value between min and max
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0001, 0.001));
        assert!(!approx_eq(1.0, 1.1, 0.001));
        assert!(is_zero(1e-12));
        assert!(!is_zero(1e-6));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }
}
