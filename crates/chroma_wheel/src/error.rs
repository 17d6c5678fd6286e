use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
    #[error("Invalid wheel dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Invalid pixel scale: {0}")]
    InvalidPixelScale(f32),

    #[error("Invalid border width: {0}")]
    InvalidBorderWidth(f32),
}

pub type Result<T> = std::result::Result<T, WheelError>;
