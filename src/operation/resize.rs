use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{InterpolationMode, ResizeKernel, TensorKernel};

use super::params::{check_len, size_to_hw};
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct ResizeOperation {
    pub size: Vec<i32>,
    pub interpolation: InterpolationMode,
}

impl ResizeOperation {
    pub fn new(size: Vec<i32>, interpolation: InterpolationMode) -> Self {
        Self { size, interpolation }
    }
}

impl Descriptor for ResizeOperation {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_len("size", self.size.len(), &[1, 2])
    }

    fn build_kernel(&self, _config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let (height, width) = size_to_hw(&self.size);
        Arc::new(ResizeKernel::new(height, width, self.interpolation))
    }

    fn config_string(&self) -> String {
        format!("size={:?}, interpolation={}", self.size, self.interpolation)
    }
}
