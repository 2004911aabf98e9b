//! Facial Landmark Model
//!
//! The 68-point landmark layout shared by dlib-style predictors: a fixed
//! ordering where index *i* always denotes the same anatomical location.
//! Regions of interest (eyes, mouth) are contiguous sub-ranges of that
//! ordering, exposed here as named [`RegionView`]s instead of scattered
//! index literals.

pub mod regions;

pub use regions::{FaceRegion, RegionView};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of points in the landmark layout.
pub const LANDMARK_COUNT: usize = 68;

/// Landmark error types
#[derive(Error, Debug)]
pub enum LandmarkError {
    #[error("Landmark set has {actual} points, expected {expected}")]
    WrongPointCount { expected: usize, actual: usize },
}

/// A 2D landmark point in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ordered set of exactly [`LANDMARK_COUNT`] points for one detected face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    /// Build a landmark set, rejecting any point count other than 68.
    pub fn from_points(points: Vec<Point>) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongPointCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// All 68 points in layout order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// View of one named region's points.
    pub fn region(&self, region: FaceRegion) -> RegionView<'_> {
        let (start, end) = region.span();
        RegionView::new(region, &self.points[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_points() -> Vec<Point> {
        (0..LANDMARK_COUNT)
            .map(|i| Point::new(i as f32, i as f32 * 2.0))
            .collect()
    }

    #[test]
    fn test_rejects_wrong_point_count() {
        let result = LandmarkSet::from_points(vec![Point::default(); 67]);
        assert!(matches!(
            result,
            Err(LandmarkError::WrongPointCount {
                expected: 68,
                actual: 67
            })
        ));
    }

    #[test]
    fn test_region_spans_are_anatomically_fixed() {
        let set = LandmarkSet::from_points(grid_points()).unwrap();

        let mouth = set.region(FaceRegion::Mouth);
        assert_eq!(mouth.points().len(), 20);
        assert_eq!(mouth.points()[0], Point::new(48.0, 96.0));

        let right_eye = set.region(FaceRegion::RightEye);
        assert_eq!(right_eye.points().len(), 6);
        assert_eq!(right_eye.points()[0], Point::new(36.0, 72.0));

        let left_eye = set.region(FaceRegion::LeftEye);
        assert_eq!(left_eye.points().len(), 6);
        assert_eq!(left_eye.points()[0], Point::new(42.0, 84.0));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }
}
