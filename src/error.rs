use thiserror::Error;

// Raised by descriptor validation. Never leaves the factory boundary,
// it only feeds the diagnostic line logged by `validate()`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("{field} vector has incorrect size: {len}")]
    InvalidLength { field: &'static str, len: usize },

    #[error("{field} must be a vector of one or two values, got {len}")]
    ExpectedOneOrTwo { field: &'static str, len: usize },

    #[error("{field} cannot be negative: {value}")]
    Negative { field: &'static str, value: i32 },
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Invalid tensor shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    #[error("{kernel} does not support {channels} channel(s)")]
    UnsupportedChannels { kernel: &'static str, channels: usize },

    #[error("{kernel} does not support {dtype} tensors")]
    UnsupportedDataType { kernel: &'static str, dtype: &'static str },

    #[error("Crop size {crop_h}x{crop_w} is larger than padded input {height}x{width}")]
    CropTooLarge {
        crop_h: usize,
        crop_w: usize,
        height: usize,
        width: usize,
    },

    #[error("Invalid kernel parameter: {0}")]
    InvalidParameter(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to acquire lock on RNG")]
    RngLockError,
}

pub type Result<T> = std::result::Result<T, TransformError>;
