//! Body angles using dot product and atan2
//!
//! - Alignment deviation: how far shoulder, hip and ankle bend away from a
//!   straight line, measured at the hip.
//! - Body-ground angle: inclination of the shoulder→ankle segment against
//!   the horizontal, folded into [0, 90].

use super::points::ScaledPoint;

/// Keeps the cosine finite when the hip coincides with a neighbour
pub const COS_EPSILON: f32 = 1e-6;

/// Deviation from a straight line in degrees
///
/// Uses dot product formula at the hip vertex:
/// cos(θ) = (v1 · v2) / (|v1| × |v2| + ε), v1 = shoulder - hip, v2 = ankle - hip
///
/// Returns |180° - θ|:
/// - 0° = shoulder, hip and ankle perfectly in line
/// - 90° = body folded at a right angle
pub fn alignment_deviation(shoulder: &ScaledPoint, hip: &ScaledPoint, ankle: &ScaledPoint) -> f32 {
    let v1 = shoulder - hip;
    let v2 = ankle - hip;

    let cos_angle = (v1.dot(&v2) / (v1.norm() * v2.norm() + COS_EPSILON)).clamp(-1.0, 1.0);

    (180.0 - cos_angle.acos().to_degrees()).abs()
}

/// Angle between the shoulder→ankle segment and the horizontal, in [0, 90]
///
/// Leaning left or right of vertical gives the same value.
pub fn body_ground_angle(shoulder: &ScaledPoint, ankle: &ScaledPoint) -> f32 {
    let d = shoulder - ankle;
    let raw = d.y.atan2(d.x).to_degrees().abs();

    let folded = if raw > 90.0 { 180.0 - raw } else { raw };
    // to_degrees(π) can land a hair above 180
    folded.clamp(0.0, 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_straight_body() {
        let shoulder = ScaledPoint::new(0.0, 100.0);
        let hip = ScaledPoint::new(100.0, 100.0);
        let ankle = ScaledPoint::new(200.0, 100.0);
        assert_eq!(alignment_deviation(&shoulder, &hip, &ankle), 0.0);
    }

    #[test]
    fn test_sagging_hips() {
        // Hip dropped so the body bends 90° at the hip
        let shoulder = ScaledPoint::new(0.0, 0.0);
        let hip = ScaledPoint::new(100.0, 100.0);
        let ankle = ScaledPoint::new(200.0, 0.0);
        assert_abs_diff_eq!(alignment_deviation(&shoulder, &hip, &ankle), 90.0, epsilon = 0.01);
    }

    #[test]
    fn test_collapsed_hip_is_finite() {
        let p = ScaledPoint::new(50.0, 50.0);
        let ankle = ScaledPoint::new(200.0, 50.0);
        let dev = alignment_deviation(&p, &p, &ankle);
        assert!(dev.is_finite());
        assert!(dev >= 0.0);
    }

    #[test]
    fn test_deviation_never_negative() {
        let pts = [
            (ScaledPoint::new(3.0, 7.0), ScaledPoint::new(-2.0, 5.0), ScaledPoint::new(9.0, -4.0)),
            (ScaledPoint::new(0.0, 0.0), ScaledPoint::new(1.0, 1.0), ScaledPoint::new(2.0, 2.0)),
            (ScaledPoint::new(10.0, 0.0), ScaledPoint::new(0.0, 0.0), ScaledPoint::new(10.0, 0.0)),
        ];
        for (s, h, a) in pts.iter() {
            let dev = alignment_deviation(s, h, a);
            assert!((0.0..=180.0).contains(&dev), "deviation {dev}");
        }
    }

    #[test]
    fn test_body_ground_angle_horizontal() {
        // Plank, head to the left or to the right
        let ankle = ScaledPoint::new(100.0, 300.0);
        assert_abs_diff_eq!(body_ground_angle(&ScaledPoint::new(400.0, 300.0), &ankle), 0.0);
        assert_abs_diff_eq!(body_ground_angle(&ScaledPoint::new(-200.0, 300.0), &ankle), 0.0);
    }

    #[test]
    fn test_body_ground_angle_standing() {
        // Image y grows downwards: shoulder above ankle
        let angle = body_ground_angle(&ScaledPoint::new(100.0, 0.0), &ScaledPoint::new(100.0, 400.0));
        assert_abs_diff_eq!(angle, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_body_ground_angle_folds_both_sides() {
        let ankle = ScaledPoint::new(0.0, 0.0);
        let right = body_ground_angle(&ScaledPoint::new(100.0, -100.0), &ankle);
        let left = body_ground_angle(&ScaledPoint::new(-100.0, -100.0), &ankle);
        assert_abs_diff_eq!(right, 45.0, epsilon = 1e-4);
        assert_abs_diff_eq!(left, 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_body_ground_angle_in_range() {
        for i in 0..72 {
            let t = (i as f32 * 5.0).to_radians();
            let shoulder = ScaledPoint::new(t.cos() * 250.0, t.sin() * 250.0);
            let angle = body_ground_angle(&shoulder, &ScaledPoint::origin());
            assert!((0.0..=90.0).contains(&angle), "angle {angle} at step {i}");
        }
    }
}
