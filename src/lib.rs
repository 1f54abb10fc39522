pub mod config;
pub mod error;
pub mod kernel;
pub mod operation;
pub mod tensor;
pub mod vision;

pub use config::KernelConfig;
pub use error::{ParamError, Result, TransformError};
pub use kernel::{BorderType, InterpolationMode, KernelArgs, TensorKernel};
pub use operation::TensorOperation;
pub use tensor::{Tensor, TensorData, TensorDesc};
