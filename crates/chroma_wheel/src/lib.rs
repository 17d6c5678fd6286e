//! chroma_wheel - hue/saturation color wheel rasterization and sampling
//!
//! This crate generates radial HSB color wheel bitmaps and answers
//! point-to-color queries against the same wheel in closed form.

pub mod color;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod sampler;
pub mod wheel_math;

pub use color::{hsb_to_rgb, rgb_to_hsb, ColorSample};
pub use error::{Result, WheelError};
pub use generator::{generate, generate_scaled, WheelImage, MAX_PIXEL_DIMENSION};
pub use geometry::{Geometry, Point, Rectangle, Size};
pub use sampler::{is_on_wheel, sample};
