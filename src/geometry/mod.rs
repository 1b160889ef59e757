// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - vectors, matrices, quaternions and point clouds
//!
//! Fixed-size types are aliases of `nalgebra` types; the modules add the
//! predicates and constructors the rest of the library relies on.

mod bbox;
pub mod mat3;
pub mod mat4;
pub mod point_cloud;
pub mod quat;
pub mod vec2;
pub mod vec3;
pub mod vec4;
pub mod vecn;

/// Scalar type used throughout the library
pub type Real = f64;

pub use bbox::BoundingBox;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use point_cloud::{PointCloud, PointCloudError};
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use vecn::VecN;
