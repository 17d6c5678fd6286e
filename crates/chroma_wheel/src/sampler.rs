//! Closed-form point sampling against a wheel geometry.
//!
//! Colors are re-derived from angle and distance instead of reading the
//! rendered bitmap, so sampling never depends on a generated image.
//!
//! Boundary policy: a point exactly on the wheel edge (or exactly on the
//! inner edge of the border band) still counts as inside. Only points
//! strictly beyond those circles are rejected.

use crate::color::ColorSample;
use crate::geometry::{Geometry, Point};
use crate::wheel_math::wheel_color;

/// Check whether a point falls on the visible part of the wheel.
pub fn is_on_wheel(point: Point, geometry: &Geometry) -> bool {
    if !geometry.bounds().contains(point) {
        log::trace!("Sample ({}, {}) outside bounds", point.x, point.y);
        return false;
    }

    let distance = point.distance_to(geometry.center());
    let radius = geometry.radius();
    let border_width = geometry.border_width();

    if border_width > 0.0 && distance > radius - border_width {
        log::trace!("Sample ({}, {}) on border", point.x, point.y);
        return false;
    }

    if distance > radius {
        log::trace!("Sample ({}, {}) outside wheel", point.x, point.y);
        return false;
    }

    true
}

/// Color of the wheel under `point`, or `None` when the point is outside
/// the bounds, on the border band, or outside the inscribed circle.
pub fn sample(point: Point, geometry: &Geometry) -> Option<ColorSample> {
    if !is_on_wheel(point, geometry) {
        return None;
    }

    let center = geometry.center();
    Some(wheel_color(
        point.x - center.x,
        point.y - center.y,
        geometry.radius(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keeps edge probes clear of the rim; the sampler itself has no inset.
    const EDGE_INSET: f32 = 10.0;

    fn geometry(width: f32, height: f32) -> Geometry {
        Geometry::new(width, height).unwrap()
    }

    #[test]
    fn test_point_outside_bounds_has_no_color() {
        let g = geometry(300.0, 300.0);
        assert!(sample(Point::new(-100.0, -100.0), &g).is_none());
        assert!(sample(Point::new(150.0, 301.0), &g).is_none());
    }

    #[test]
    fn test_corner_inside_bounds_but_outside_radius_has_no_color() {
        let g = geometry(300.0, 300.0);
        assert!(sample(Point::new(0.0, 0.0), &g).is_none());
    }

    #[test]
    fn test_point_on_border_has_no_color() {
        let g = geometry(300.0, 300.0).with_border_width(20.0).unwrap();
        let point = Point::new(300.0 - 10.0, 150.0);
        assert!(sample(point, &g).is_none());

        // Same point without a border is on the wheel
        let plain = geometry(300.0, 300.0);
        assert!(sample(point, &plain).is_some());
    }

    #[test]
    fn test_red_at_max_x_mid_y() {
        let g = geometry(200.0, 200.0);
        let color = sample(Point::new(200.0 - EDGE_INSET, 100.0), &g).unwrap();
        let (r, g_channel, b) = color.to_rgb();

        assert!((r - 1.0).abs() < 0.001);
        assert!(g_channel < r);
        assert!(b < r);
        assert!(color.hue.abs() < 0.001);
    }

    #[test]
    fn test_white_at_center() {
        let g = geometry(200.0, 200.0);
        let color = sample(Point::new(100.0, 100.0), &g).unwrap();
        let (r, g_channel, b) = color.to_rgb();

        assert!((r - 1.0).abs() < 0.005);
        assert!((g_channel - 1.0).abs() < 0.005);
        assert!((b - 1.0).abs() < 0.005);
        assert_eq!(color.saturation, 0.0);
    }

    #[test]
    fn test_everything_beyond_radius_is_rejected() {
        let g = geometry(200.0, 200.0);
        let center = g.center();
        for step in 0..64 {
            let angle = step as f32 / 64.0 * std::f32::consts::TAU;
            let point = Point::new(
                center.x + angle.cos() * 100.5,
                center.y + angle.sin() * 100.5,
            );
            assert!(sample(point, &g).is_none(), "angle {}", angle);
        }
    }

    #[test]
    fn test_border_band_rejected_all_around() {
        let g = geometry(200.0, 200.0).with_border_width(15.0).unwrap();
        let center = g.center();
        for step in 0..32 {
            let angle = step as f32 / 32.0 * std::f32::consts::TAU;
            let point = Point::new(center.x + angle.cos() * 90.0, center.y + angle.sin() * 90.0);
            assert!(sample(point, &g).is_none());

            let inner = Point::new(center.x + angle.cos() * 80.0, center.y + angle.sin() * 80.0);
            assert!(sample(inner, &g).is_some());
        }
    }

    #[test]
    fn test_exact_edge_counts_as_inside() {
        let g = geometry(200.0, 200.0);
        assert!(is_on_wheel(Point::new(200.0, 100.0), &g));
        assert!(!is_on_wheel(Point::new(200.01, 100.0), &g));
    }

    #[test]
    fn test_non_square_geometry_centers_wheel() {
        let g = geometry(200.0, 400.0);
        // Top of bounds is outside the 100px radius around (100, 200)
        assert!(sample(Point::new(100.0, 50.0), &g).is_none());

        let color = sample(Point::new(100.0, 290.0), &g).unwrap();
        assert!((color.hue - 0.25).abs() < 0.001);
        assert!((color.saturation - 0.9).abs() < 0.001);
    }

    #[test]
    fn test_saturation_grows_with_distance() {
        let g = geometry(200.0, 200.0);
        let near = sample(Point::new(120.0, 100.0), &g).unwrap();
        let far = sample(Point::new(180.0, 100.0), &g).unwrap();
        assert!(near.saturation < far.saturation);
        assert_eq!(near.brightness, 1.0);
        assert_eq!(far.alpha, 1.0);
    }
}
