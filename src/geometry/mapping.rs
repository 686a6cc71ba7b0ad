//! Conversion between surface pixels and normalized drawing coordinates.

use super::Point;
use crate::error::GeometryError;

/// Maps pixel positions on a drawing surface of fixed size to normalized
/// coordinates and back.
///
/// Pixel origin is the top-left corner with `y` growing downward; the
/// normalized space has its origin at the surface center with `y` growing
/// upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapper {
    width: f64,
    height: f64,
}

impl SurfaceMapper {
    /// Fails with [`GeometryError::InvalidInput`] unless both sides are finite
    /// and strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(GeometryError::InvalidInput { width, height })
        }
    }

    pub fn to_normalized(&self, px: f64, py: f64) -> Point {
        Point::new(
            (px / self.width).mul_add(2.0, -1.0),
            -(py / self.height).mul_add(2.0, -1.0),
        )
    }

    /// Like [`Self::to_normalized`], but positions off the surface are pulled
    /// back onto its edge so the result stays within `[-1, 1]` on both axes.
    pub fn to_normalized_clamped(&self, px: f64, py: f64) -> Point {
        self.to_normalized(px.clamp(0.0, self.width), py.clamp(0.0, self.height))
    }

    /// Inverse of [`Self::to_normalized`], used when painting shapes.
    pub fn to_pixel(&self, point: Point) -> (f64, f64) {
        (
            (point.x + 1.0) * 0.5 * self.width,
            (1.0 - point.y) * 0.5 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point(p: Point, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, y, epsilon = 1e-12);
    }

    #[test]
    fn corners_and_center_map_to_normalized_extremes() {
        let mapper = SurfaceMapper::new(700.0, 500.0).expect("valid surface");
        assert_point(mapper.to_normalized(0.0, 0.0), -1.0, 1.0);
        assert_point(mapper.to_normalized(700.0, 500.0), 1.0, -1.0);
        assert_point(mapper.to_normalized(350.0, 250.0), 0.0, 0.0);
        assert_point(mapper.to_normalized(700.0, 0.0), 1.0, 1.0);
    }

    #[test]
    fn pixel_round_trip() {
        let mapper = SurfaceMapper::new(640.0, 480.0).expect("valid surface");
        for (px, py) in [(0.0, 0.0), (12.5, 400.0), (639.0, 1.0), (320.0, 240.0)] {
            let (bx, by) = mapper.to_pixel(mapper.to_normalized(px, py));
            assert_abs_diff_eq!(bx, px, epsilon = 1e-9);
            assert_abs_diff_eq!(by, py, epsilon = 1e-9);
        }
    }

    #[test]
    fn clamped_mapping_stays_on_surface() {
        let mapper = SurfaceMapper::new(700.0, 700.0).expect("valid surface");
        assert_point(mapper.to_normalized_clamped(800.0, 800.0), 1.0, -1.0);
        assert_point(mapper.to_normalized_clamped(-50.0, 350.0), -1.0, 0.0);
        assert_point(mapper.to_normalized_clamped(350.0, -10.0), 0.0, 1.0);
        assert_point(mapper.to_normalized_clamped(175.0, 525.0), -0.5, -0.5);
    }

    #[test]
    fn rejects_empty_or_negative_surfaces() {
        for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-5.0, 100.0), (100.0, f64::NAN)] {
            let err = SurfaceMapper::new(w, h).expect_err("must reject");
            assert!(matches!(err, GeometryError::InvalidInput { .. }));
        }
    }

    #[test]
    fn quarter_point_on_square_surface() {
        let mapper = SurfaceMapper::new(700.0, 700.0).expect("valid surface");
        assert_point(mapper.to_normalized(175.0, 175.0), -0.5, 0.5);
    }
}
