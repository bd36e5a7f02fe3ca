//! Display-space points

use nalgebra::Point2;

/// A landmark mapped into display pixels
pub type ScaledPoint = Point2<f32>;

/// Arithmetic mean of two points
pub fn midpoint(a: &ScaledPoint, b: &ScaledPoint) -> ScaledPoint {
    nalgebra::center(a, b)
}

/// Euclidean distance in pixels
pub fn distance(a: &ScaledPoint, b: &ScaledPoint) -> f32 {
    nalgebra::distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint() {
        let m = midpoint(&ScaledPoint::new(100.0, 40.0), &ScaledPoint::new(200.0, 60.0));
        assert_relative_eq!(m.x, 150.0);
        assert_relative_eq!(m.y, 50.0);
    }

    #[test]
    fn test_distance() {
        let d = distance(&ScaledPoint::new(0.0, 0.0), &ScaledPoint::new(30.0, 40.0));
        assert_relative_eq!(d, 50.0);
    }
}
