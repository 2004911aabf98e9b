//! Named landmark regions and their fixed index spans

use serde::{Deserialize, Serialize};

use crate::Point;

/// Named sub-range of the 68-point layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceRegion {
    /// Outer and inner mouth contour (20 points).
    Mouth,
    /// Right eye contour (6 points).
    RightEye,
    /// Left eye contour (6 points).
    LeftEye,
}

impl FaceRegion {
    /// Half-open `[start, end)` span of this region in the 68-point layout.
    pub const fn span(self) -> (usize, usize) {
        match self {
            FaceRegion::Mouth => (48, 68),
            FaceRegion::RightEye => (36, 42),
            FaceRegion::LeftEye => (42, 48),
        }
    }

    /// Number of points in the region.
    pub const fn point_count(self) -> usize {
        let (start, end) = self.span();
        end - start
    }
}

/// Borrowed view of one region's points, in region-local order.
///
/// Only constructed from a [`crate::LandmarkSet`], so the slice length
/// always matches `region.point_count()`.
#[derive(Debug, Clone, Copy)]
pub struct RegionView<'a> {
    region: FaceRegion,
    points: &'a [Point],
}

impl<'a> RegionView<'a> {
    pub(crate) fn new(region: FaceRegion, points: &'a [Point]) -> Self {
        debug_assert_eq!(points.len(), region.point_count());
        Self { region, points }
    }

    pub fn region(&self) -> FaceRegion {
        self.region
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }
}
