//! Color wheel host state.
//!
//! `ColorWheelView` owns the wheel geometry and the most recent wheel
//! bitmap. The host calls the `set_*` methods (or `layout`) whenever its
//! size, border, or pixel density changes; each call validates the new
//! state, then fully regenerates the bitmap. The bitmap is never patched
//! in place.

use std::sync::Arc;

use chroma_wheel::{
    generate_scaled, is_on_wheel, sample, ColorSample, Geometry, Point, Rectangle, Size,
    WheelError, WheelImage,
};

use crate::config::{PickerConfig, SampleStrategy};
use crate::error::Result;

/// A circular hue/saturation picker surface.
#[derive(Debug, Clone)]
pub struct ColorWheelView {
    geometry: Geometry,
    pixel_scale: f32,
    sample_strategy: SampleStrategy,
    image: Arc<WheelImage>,
    /// Incremented on every regeneration
    generation: u64,
}

impl ColorWheelView {
    /// Create a view with the given logical bounds and pixel density.
    pub fn new(width: f32, height: f32, pixel_scale: f32) -> Result<Self> {
        let geometry = Geometry::new(width, height)?;
        Self::with_geometry(geometry, pixel_scale, SampleStrategy::default())
    }

    /// Create a view from a stored configuration.
    pub fn from_config(width: f32, height: f32, config: &PickerConfig) -> Result<Self> {
        let geometry = Geometry::new(width, height)?.with_border_width(config.border_width)?;
        Self::with_geometry(geometry, config.pixel_scale, config.sample_strategy)
    }

    fn with_geometry(
        geometry: Geometry,
        pixel_scale: f32,
        sample_strategy: SampleStrategy,
    ) -> Result<Self> {
        let image = render(&geometry, pixel_scale)?;
        Ok(Self {
            geometry,
            pixel_scale,
            sample_strategy,
            image: Arc::new(image),
            generation: 1,
        })
    }

    // =========================================================================
    // Geometry updates
    // =========================================================================

    /// Resize the view. Invalid sizes are rejected and leave the view as is.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<()> {
        let geometry = Geometry::new(width, height)
            .and_then(|g| g.with_border_width(self.geometry.border_width()))
            .inspect_err(|e| log::warn!("Rejected wheel bounds {}x{}: {}", width, height, e))?;
        self.apply(geometry, self.pixel_scale)
    }

    /// Change the border inset.
    pub fn set_border_width(&mut self, border_width: f32) -> Result<()> {
        let geometry = self
            .geometry
            .with_border_width(border_width)
            .inspect_err(|e| log::warn!("Rejected border width: {}", e))?;
        self.apply(geometry, self.pixel_scale)
    }

    /// Change the display pixel density.
    pub fn set_pixel_scale(&mut self, pixel_scale: f32) -> Result<()> {
        if !pixel_scale.is_finite() || pixel_scale <= 0.0 {
            log::warn!("Rejected pixel scale {}", pixel_scale);
            return Err(WheelError::InvalidPixelScale(pixel_scale).into());
        }
        self.apply(self.geometry, pixel_scale)
    }

    pub fn set_sample_strategy(&mut self, strategy: SampleStrategy) {
        self.sample_strategy = strategy;
    }

    /// Layout pass: regenerate the wheel for the current geometry.
    pub fn layout(&mut self) -> Result<()> {
        self.apply(self.geometry, self.pixel_scale)
    }

    fn apply(&mut self, geometry: Geometry, pixel_scale: f32) -> Result<()> {
        let image = render(&geometry, pixel_scale)?;

        self.geometry = geometry;
        self.pixel_scale = pixel_scale;
        self.image = Arc::new(image);
        self.generation += 1;

        log::debug!(
            "Regenerated color wheel #{}: {}x{} px (radius {}, scale {})",
            self.generation,
            self.image.width(),
            self.image.height(),
            self.geometry.radius(),
            self.pixel_scale
        );

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Half of the smaller bounds dimension.
    pub fn radius(&self) -> f32 {
        self.geometry.radius()
    }

    pub fn border_width(&self) -> f32 {
        self.geometry.border_width()
    }

    pub fn pixel_scale(&self) -> f32 {
        self.pixel_scale
    }

    pub fn sample_strategy(&self) -> SampleStrategy {
        self.sample_strategy
    }

    /// The current wheel bitmap.
    pub fn image(&self) -> &Arc<WheelImage> {
        &self.image
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Where the square wheel image is drawn: aspect-fit and centered in bounds.
    pub fn image_frame(&self) -> Rectangle {
        self.geometry.bounds().fit_square()
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Color under a point in the view's local coordinates.
    ///
    /// Returns `None` outside the bounds, on the border band, or outside the
    /// wheel.
    pub fn pixel_color(&self, point: Point) -> Option<ColorSample> {
        match self.sample_strategy {
            SampleStrategy::Geometric => sample(point, &self.geometry),
            SampleStrategy::Bitmap => {
                if !is_on_wheel(point, &self.geometry) {
                    return None;
                }
                self.bitmap_color(point)
            }
        }
    }

    /// Reads the pixel under `point`, snapping to whichever neighbouring pixel
    /// lies closer to the wheel center. A point the geometric test accepts
    /// therefore never lands on a transparent rim pixel; the color returned
    /// may be off by up to one device pixel.
    fn bitmap_color(&self, point: Point) -> Option<ColorSample> {
        let frame = self.image_frame();
        let (width, height) = self.image.dimensions();

        let px = (point.x - frame.x) * (width as f32 / frame.width);
        let py = (point.y - frame.y) * (height as f32 / frame.height);

        let px = snap_toward(px, width as f32 / 2.0).clamp(0.0, (width - 1) as f32) as u32;
        let py = snap_toward(py, height as f32 / 2.0).clamp(0.0, (height - 1) as f32) as u32;

        self.image.color_at_pixel(px, py)
    }
}

/// Whichever of `floor(value)` / `ceil(value)` is nearer to `center`.
fn snap_toward(value: f32, center: f32) -> f32 {
    let (floor, ceil) = (value.floor(), value.ceil());
    if (ceil - center).abs() < (floor - center).abs() {
        ceil
    } else {
        floor
    }
}

/// The wheel is square: one diameter in each dimension, scaled to device pixels.
fn render(geometry: &Geometry, pixel_scale: f32) -> chroma_wheel::Result<WheelImage> {
    let diameter = geometry.diameter();
    generate_scaled(Size::new(diameter, diameter), pixel_scale)
}
