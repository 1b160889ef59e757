// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Fermat
//!
//! Geometry primitives (vectors, matrices, quaternions, point clouds) and
//! the test harness that verifies them: every provider's unit cases are
//! aggregated into one suite and run, then an external regression tool is
//! run over the fixture directory, and both results decide the overall
//! verdict.

pub mod geometry;
pub mod harness;
pub mod suites;
pub mod utils;

pub use geometry::{BoundingBox, Mat3, Mat4, PointCloud, Quat, Real, Vec2, Vec3, Vec4, VecN};
pub use harness::{
    HarnessConfig, HarnessError, HarnessReport, Orchestrator, ProviderRegistry, TestCaseCollection,
    UnitCase,
};
