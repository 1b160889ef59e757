// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! `point_cloud` provider

use crate::geometry::{PointCloud, PointCloudError, Vec3};
use crate::harness::{
    check, check_all_approx, check_approx, check_eq, check_some, CaseFailure, CaseResult,
    TestCaseCollection, UnitCase,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Default, Clone, Copy)]
pub struct TestCase;

impl TestCaseCollection for TestCase {
    fn cases(&self) -> Vec<UnitCase> {
        vec![
            UnitCase::new("test_add", add),
            UnitCase::new("test_bounding_box", bounding_box),
            UnitCase::new("test_permutate", permutate),
            UnitCase::new("test_parse", parse),
            UnitCase::new("test_parse_error", parse_error),
        ]
    }
}

fn sample() -> PointCloud {
    [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-1.0, 0.0, 5.0),
        Vec3::new(4.0, -2.0, 0.0),
    ]
    .into_iter()
    .collect()
}

fn add() -> CaseResult {
    let mut cloud = PointCloud::new();
    check(cloud.is_empty(), "new cloud must be empty")?;
    check(cloud.bounding_box().is_empty(), "empty cloud has an empty box")?;

    cloud.add(Vec3::new(1.0, 2.0, 3.0));
    check_eq(cloud.len(), 1)?;
    let first = check_some(cloud.get(0), "first point")?;
    check_all_approx(first.as_slice(), &[1.0, 2.0, 3.0])?;
    check(cloud.get(1).is_none(), "out of range index")
}

fn bounding_box() -> CaseResult {
    let cloud = sample();
    let bbox = cloud.bounding_box();
    check_all_approx(bbox.min.as_slice(), &[-1.0, -2.0, 0.0])?;
    check_all_approx(bbox.max.as_slice(), &[4.0, 2.0, 5.0])?;
    check_approx(bbox.volume(), 100.0)?;
    let contained = cloud.iter().all(|p| bbox.contains(p));
    check(contained, "box must contain every point")
}

fn permutate() -> CaseResult {
    let mut cloud = sample();
    let before = *cloud.bounding_box();
    let sum_before: Vec3 = cloud.iter().sum();

    cloud.permutate(&mut StdRng::seed_from_u64(7));
    let sum_after: Vec3 = cloud.iter().sum();

    check_eq(cloud.len(), 3)?;
    check_all_approx(sum_after.as_slice(), sum_before.as_slice())?;
    check_eq(*cloud.bounding_box(), before)
}

fn parse() -> CaseResult {
    let cloud = PointCloud::parse("# header\n1 2 3\n\n  -1.5 0 2e1  \n")
        .map_err(|e| CaseFailure::new(e.to_string()))?;
    check_eq(cloud.len(), 2)?;
    let second = check_some(cloud.get(1), "second point")?;
    check_all_approx(second.as_slice(), &[-1.5, 0.0, 20.0])
}

fn parse_error() -> CaseResult {
    match PointCloud::parse("1 2 3\n4 5\n") {
        Err(PointCloudError::Parse { line, .. }) => check_eq(line, 2),
        other => check(false, format!("expected a parse error, got {other:?}")),
    }?;
    check(PointCloud::parse("1 2 x\n").is_err(), "non-numeric coordinate")
}
