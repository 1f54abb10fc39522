use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{BorderType, RandomCropKernel, TensorKernel};

use super::params::{check_len, size_to_hw};
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct RandomCropOperation {
    pub size: Vec<i32>,
    pub padding: Vec<i32>,
    pub pad_if_needed: bool,
    pub fill_value: Vec<u8>,
}

impl RandomCropOperation {
    pub fn new(size: Vec<i32>, padding: Vec<i32>, pad_if_needed: bool, fill_value: Vec<u8>) -> Self {
        Self {
            size,
            padding,
            pad_if_needed,
            fill_value,
        }
    }
}

impl Descriptor for RandomCropOperation {
    fn name(&self) -> &'static str {
        "RandomCrop"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_len("size", self.size.len(), &[1, 2])?;
        check_len("padding", self.padding.len(), &[4])?;
        check_len("fill_value", self.fill_value.len(), &[3])
    }

    // Padding is taken as (top, bottom, left, right), the border is always constant
    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let (crop_h, crop_w) = size_to_hw(&self.size);
        let (padding, fill) = (&self.padding, &self.fill_value);
        Arc::new(RandomCropKernel::new(
            crop_h,
            crop_w,
            padding[0],
            padding[1],
            padding[2],
            padding[3],
            BorderType::Constant,
            self.pad_if_needed,
            fill[0],
            fill[1],
            fill[2],
            config,
        ))
    }

    fn config_string(&self) -> String {
        format!(
            "size={:?}, padding={:?}, pad_if_needed={}, fill_value={:?}",
            self.size, self.padding, self.pad_if_needed, self.fill_value
        )
    }
}
