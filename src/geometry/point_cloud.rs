// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Point cloud with an incrementally maintained bounding box

use super::{BoundingBox, Real, Vec3};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Errors produced while reading a point cloud
#[derive(Debug, Error)]
pub enum PointCloudError {
    #[error("line {line}: expected three coordinates, found {content:?}")]
    Parse { line: usize, content: String },
    #[error("failed to read point cloud: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordered collection of 3D points
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    points: Vec<Vec3>,
    bbox: BoundingBox,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: Vec3) {
        self.bbox.expand_to_include(&point);
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Vec3> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Randomly reorder the points. The bounding box is unaffected.
    pub fn permutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.points.shuffle(rng);
    }

    /// Parse `x y z` triples, one per line. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn parse(source: &str) -> Result<Self, PointCloudError> {
        Self::from_reader(source.as_bytes())
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, PointCloudError> {
        let mut cloud = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let coords: Vec<Real> = trimmed
                .split_whitespace()
                .map(str::parse::<Real>)
                .collect::<Result<_, _>>()
                .map_err(|_| PointCloudError::Parse {
                    line: idx + 1,
                    content: trimmed.to_string(),
                })?;

            match coords.as_slice() {
                [x, y, z] => cloud.add(Vec3::new(*x, *y, *z)),
                _ => {
                    return Err(PointCloudError::Parse {
                        line: idx + 1,
                        content: trimmed.to_string(),
                    })
                }
            }
        }

        Ok(cloud)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PointCloudError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl Extend<Vec3> for PointCloud {
    fn extend<I: IntoIterator<Item = Vec3>>(&mut self, iter: I) {
        for point in iter {
            self.add(point);
        }
    }
}

impl FromIterator<Vec3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        let mut cloud = Self::new();
        cloud.extend(iter);
        cloud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_parse_and_bbox() {
        let cloud = PointCloud::parse("# header\n0 0 0\n\n1 2 3\n-1 0.5 2\n").unwrap();
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud.bounding_box().min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(cloud.bounding_box().max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_errors() {
        let err = PointCloud::parse("0 0 0\n1 2\n").unwrap_err();
        assert!(matches!(err, PointCloudError::Parse { line: 2, .. }));
        assert!(PointCloud::parse("a b c").is_err());
    }

    #[test]
    fn test_permutate_keeps_points() {
        let mut cloud: PointCloud = (0..20).map(|i| Vec3::new(i as Real, 0.0, 0.0)).collect();
        let bbox = *cloud.bounding_box();
        cloud.permutate(&mut StdRng::seed_from_u64(7));

        let mut xs: Vec<Real> = cloud.iter().map(|p| p.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, (0..20).map(|i| i as Real).collect::<Vec<_>>());
        assert_eq!(*cloud.bounding_box(), bbox);
    }

    #[test]
    fn test_from_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cloud.xyz");
        std::fs::write(&path, "# scan
1 1 1
2 -3 0.5
")?;

        let cloud = PointCloud::from_file(&path)?;
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.get(1), Some(&Vec3::new(2.0, -3.0, 0.5)));

        let missing = PointCloud::from_file(temp_dir.path().join("missing.xyz"));
        assert!(matches!(missing, Err(PointCloudError::Io(_))));
        Ok(())
    }
}
