//! Polar mapping from wheel offsets to hue and saturation.
//!
//! Both the rasterizer and the point sampler go through these functions, so
//! the color under any point matches the color drawn there.

use std::f32::consts::TAU;

use crate::color::ColorSample;

/// Hue for an offset from the wheel center, in turns.
///
/// Angle zero points along +x (to the right of center). The result is in
/// [0, 1) and never equal to 1.0.
pub fn hue_at(dx: f32, dy: f32) -> f32 {
    let hue = dy.atan2(dx) / TAU;
    let hue = if hue < 0.0 { hue + 1.0 } else { hue };
    // -0.0 / tiny negatives can round up to exactly 1.0
    if hue >= 1.0 { 0.0 } else { hue }
}

/// Saturation for a distance from the wheel center.
pub fn saturation_at(distance: f32, max_radius: f32) -> f32 {
    if max_radius <= 0.0 {
        return 0.0;
    }
    (distance / max_radius).clamp(0.0, 1.0)
}

/// Full-brightness wheel color at an offset from the center.
///
/// Callers are responsible for the visibility test; this always returns an
/// opaque color.
pub fn wheel_color(dx: f32, dy: f32, max_radius: f32) -> ColorSample {
    let distance = (dx * dx + dy * dy).sqrt();
    ColorSample::from_hsb(hue_at(dx, dy), saturation_at(distance, max_radius), 1.0)
}
