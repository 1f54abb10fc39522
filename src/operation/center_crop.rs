use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{CenterCropKernel, TensorKernel};

use super::params::{check_len, size_to_hw};
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct CenterCropOperation {
    pub size: Vec<i32>,
}

impl CenterCropOperation {
    pub fn new(size: Vec<i32>) -> Self {
        Self { size }
    }
}

impl Descriptor for CenterCropOperation {
    fn name(&self) -> &'static str {
        "CenterCrop"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_len("size", self.size.len(), &[1, 2])
    }

    fn build_kernel(&self, _config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let (crop_h, crop_w) = size_to_hw(&self.size);
        Arc::new(CenterCropKernel::new(crop_h, crop_w))
    }

    fn config_string(&self) -> String {
        format!("size={:?}", self.size)
    }
}
