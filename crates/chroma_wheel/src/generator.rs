//! Color wheel rasterization.
//!
//! Produces an RGBA bitmap where hue follows the angle around the center and
//! saturation follows the normalized distance from it, at full brightness.
//! Pixels outside the inscribed circle are fully transparent.

use image::{Rgba, RgbaImage};

use crate::color::{rgb_to_hsb, ColorSample};
use crate::error::{Result, WheelError};
use crate::geometry::Size;
use crate::wheel_math::wheel_color;

/// Largest accepted side length in device pixels.
pub const MAX_PIXEL_DIMENSION: u32 = 16_384;

/// An immutable, fully initialized wheel bitmap.
///
/// Never mutated after generation; a geometry change produces a new image.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelImage {
    pixels: RgbaImage,
}

impl WheelImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Read back the color of a single pixel.
    ///
    /// Returns `None` for coordinates outside the image or for transparent
    /// pixels. Hue and saturation are recovered from 8-bit channels, so they
    /// are only as precise as the bitmap.
    pub fn color_at_pixel(&self, x: u32, y: u32) -> Option<ColorSample> {
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel_checked(x, y)?;
        if a == 0 {
            return None;
        }

        let (hue, saturation, brightness) =
            rgb_to_hsb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);

        Some(ColorSample {
            hue,
            saturation,
            brightness,
            alpha: a as f32 / 255.0,
        })
    }
}

/// Generate a wheel bitmap of exactly `pixel_width` x `pixel_height` pixels.
///
/// The wheel is the circle inscribed in the bitmap; it is centered and its
/// radius is half of the smaller dimension. Either side must be between 1
/// and [`MAX_PIXEL_DIMENSION`].
pub fn generate(pixel_width: u32, pixel_height: u32) -> Result<WheelImage> {
    let invalid = || WheelError::InvalidDimensions {
        width: pixel_width as f32,
        height: pixel_height as f32,
    };

    if pixel_width == 0
        || pixel_height == 0
        || pixel_width > MAX_PIXEL_DIMENSION
        || pixel_height > MAX_PIXEL_DIMENSION
    {
        return Err(invalid());
    }
    (pixel_width as usize)
        .checked_mul(pixel_height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(invalid)?;

    let half_width = pixel_width as f32 / 2.0;
    let half_height = pixel_height as f32 / 2.0;
    let max_radius = half_width.min(half_height);
    let max_radius_squared = max_radius * max_radius;

    let pixels = RgbaImage::from_fn(pixel_width, pixel_height, |px, py| {
        let dx = px as f32 - half_width;
        let dy = py as f32 - half_height;

        if dx * dx + dy * dy > max_radius_squared {
            Rgba(ColorSample::TRANSPARENT.to_rgba8())
        } else {
            Rgba(wheel_color(dx, dy, max_radius).to_rgba8())
        }
    });

    log::trace!("Generated {}x{} color wheel", pixel_width, pixel_height);

    Ok(WheelImage { pixels })
}

/// Generate a wheel for a logical display size at the given pixel density.
///
/// Each dimension is `display * pixel_scale`, rounded to the nearest device
/// pixel.
pub fn generate_scaled(display: Size, pixel_scale: f32) -> Result<WheelImage> {
    if !pixel_scale.is_finite() || pixel_scale <= 0.0 {
        return Err(WheelError::InvalidPixelScale(pixel_scale));
    }
    if !display.is_valid() {
        return Err(WheelError::InvalidDimensions {
            width: display.width,
            height: display.height,
        });
    }

    let pixel_width = (display.width * pixel_scale).round();
    let pixel_height = (display.height * pixel_scale).round();
    let max = MAX_PIXEL_DIMENSION as f32;
    if pixel_width < 1.0 || pixel_height < 1.0 || pixel_width > max || pixel_height > max {
        return Err(WheelError::InvalidDimensions {
            width: pixel_width,
            height: pixel_height,
        });
    }

    generate(pixel_width as u32, pixel_height as u32)
}
