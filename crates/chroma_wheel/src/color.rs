//! HSB color conversion and the sampled color type.
//!
//! Hue is expressed in turns (0.0-1.0) throughout this crate rather than
//! degrees, matching how the wheel maps angle to hue.

/// Convert HSB to RGB.
///
/// # Arguments
/// * `h` - Hue in turns (0.0-1.0), wrapped if outside that range
/// * `s` - Saturation (0.0-1.0)
/// * `b` - Brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsb_to_rgb(h: f32, s: f32, b: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(1.0) * 360.0;
    let c = b * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = b - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert RGB (0.0-1.0) to HSB with hue in turns.
///
/// Achromatic colors report a hue of 0.
pub fn rgb_to_hsb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue_degrees = if delta <= f32::EPSILON {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };
    let hue = (hue_degrees / 360.0).rem_euclid(1.0);

    (hue, saturation, max)
}

/// A color read off the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Hue in turns, [0, 1)
    pub hue: f32,
    /// Saturation, [0, 1]
    pub saturation: f32,
    /// Brightness, always 1.0 for colors on the wheel
    pub brightness: f32,
    /// Opacity, 0.0 outside the wheel and 1.0 inside
    pub alpha: f32,
}

impl ColorSample {
    pub const TRANSPARENT: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        alpha: 0.0,
    };

    /// Create an opaque color from HSB components.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha: 1.0,
        }
    }

    pub fn to_rgb(&self) -> (f32, f32, f32) {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }

    /// RGBA bytes. Transparent samples yield all zeros.
    pub fn to_rgba8(&self) -> [u8; 4] {
        if self.alpha <= 0.0 {
            return [0, 0, 0, 0];
        }
        let (r, g, b) = self.to_rgb();
        [
            channel_to_u8(r),
            channel_to_u8(g),
            channel_to_u8(b),
            channel_to_u8(self.alpha),
        ]
    }

    /// Hex string in `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_hsb_to_rgb_red() {
        let (r, g, b) = hsb_to_rgb(0.0, 1.0, 1.0);
        assert!(approx_eq(r, 1.0));
        assert!(approx_eq(g, 0.0));
        assert!(approx_eq(b, 0.0));
    }

    #[test]
    fn test_hsb_to_rgb_green() {
        let (r, g, b) = hsb_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(approx_eq(r, 0.0));
        assert!(approx_eq(g, 1.0));
        assert!(approx_eq(b, 0.0));
    }

    #[test]
    fn test_hsb_to_rgb_blue() {
        let (r, g, b) = hsb_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!(approx_eq(r, 0.0));
        assert!(approx_eq(g, 0.0));
        assert!(approx_eq(b, 1.0));
    }

    #[test]
    fn test_zero_saturation_is_white_at_full_brightness() {
        for hue in [0.0, 0.2, 0.5, 0.9] {
            let (r, g, b) = hsb_to_rgb(hue, 0.0, 1.0);
            assert!(approx_eq(r, 1.0) && approx_eq(g, 1.0) && approx_eq(b, 1.0));
        }
    }

    #[test]
    fn test_rgb_to_hsb_inverts_primary_colors() {
        let (h, s, b) = rgb_to_hsb(0.0, 0.0, 1.0);
        assert!(approx_eq(h, 2.0 / 3.0));
        assert!(approx_eq(s, 1.0));
        assert!(approx_eq(b, 1.0));

        let (h, s, _) = rgb_to_hsb(1.0, 0.5, 0.5);
        assert!(approx_eq(h, 0.0));
        assert!(approx_eq(s, 0.5));
    }

    #[test]
    fn test_rgb_to_hsb_gray_has_no_saturation() {
        let (h, s, b) = rgb_to_hsb(0.4, 0.4, 0.4);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!(approx_eq(b, 0.4));
    }

    #[test]
    fn test_sample_to_rgba8_and_hex() {
        let red = ColorSample::from_hsb(0.0, 1.0, 1.0);
        assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(red.to_hex(), "#FF0000");

        let white = ColorSample::from_hsb(0.7, 0.0, 1.0);
        assert_eq!(white.to_hex(), "#FFFFFF");

        assert_eq!(ColorSample::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
    }
}
