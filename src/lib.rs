//! Chroma - circular hue/saturation color picker core
//!
//! Hosts a color wheel for a view: keeps its geometry current, regenerates
//! the wheel bitmap at the display's pixel density, and answers
//! point-to-color queries.

pub mod config;
pub mod error;
pub mod logging;
pub mod view;

pub use chroma_wheel::{ColorSample, Geometry, Point, Rectangle, Size, WheelImage};
pub use config::{LogLevel, PickerConfig, SampleStrategy, CONFIG_VERSION};
pub use error::{PickerError, Result};
pub use view::ColorWheelView;
