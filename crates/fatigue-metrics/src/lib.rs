//! Geometric Ratio Computation
//!
//! Pure per-frame scoring of facial landmark regions:
//! - EAR (eye aspect ratio): vertical eyelid gap over horizontal eye span,
//!   lower means more closed
//! - MAR (mouth aspect ratio): lip gap over mouth width, higher means
//!   more open
//!
//! Both ratios are undefined when the horizontal corner distance
//! degenerates to zero; that case is reported as `None` rather than a
//! division by zero.

use face_landmarks::{FaceRegion, LandmarkSet, RegionView};
use serde::{Deserialize, Serialize};

/// The two scalar ratios computed for one face in one frame.
///
/// `None` means the ratio was undefined for this frame (degenerate
/// geometry); downstream decision logic treats it as neither below the
/// eye threshold nor above the mouth threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatioPair {
    pub ear: Option<f32>,
    pub mar: Option<f32>,
}

/// Eye aspect ratio for a 6-point eye region.
///
/// `EAR = (‖p1−p5‖ + ‖p2−p4‖) / (2·‖p0−p3‖)` where p0/p3 are the
/// horizontal corners and (p1, p5), (p2, p4) the vertical pairs.
pub fn eye_aspect_ratio(eye: RegionView<'_>) -> Option<f32> {
    debug_assert!(matches!(
        eye.region(),
        FaceRegion::LeftEye | FaceRegion::RightEye
    ));
    let p = eye.points();
    let vertical = p[1].distance(p[5]) + p[2].distance(p[4]);
    let horizontal = p[0].distance(p[3]);
    if horizontal == 0.0 {
        return None;
    }
    Some(vertical / (2.0 * horizontal))
}

/// Mouth aspect ratio for a 20-point mouth region.
///
/// `MAR = (‖q13−q19‖ + ‖q14−q18‖ + ‖q15−q17‖) / (3·‖q12−q16‖)` using
/// region-local indices; q12/q16 are the inner lip corners and the three
/// numerator pairs are vertical lip distances.
pub fn mouth_aspect_ratio(mouth: RegionView<'_>) -> Option<f32> {
    debug_assert_eq!(mouth.region(), FaceRegion::Mouth);
    let q = mouth.points();
    let vertical = q[13].distance(q[19]) + q[14].distance(q[18]) + q[15].distance(q[17]);
    let horizontal = q[12].distance(q[16]);
    if horizontal == 0.0 {
        return None;
    }
    Some(vertical / (3.0 * horizontal))
}

/// Compute both ratios for one face.
///
/// The face EAR is the mean of the left and right eye ratios; it is
/// undefined if either eye is degenerate.
pub fn face_ratios(landmarks: &LandmarkSet) -> RatioPair {
    let left = eye_aspect_ratio(landmarks.region(FaceRegion::LeftEye));
    let right = eye_aspect_ratio(landmarks.region(FaceRegion::RightEye));
    let ear = match (left, right) {
        (Some(l), Some(r)) => Some((l + r) / 2.0),
        _ => None,
    };
    let mar = mouth_aspect_ratio(landmarks.region(FaceRegion::Mouth));
    RatioPair { ear, mar }
}
