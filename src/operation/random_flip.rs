use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{RandomFlipKernel, TensorKernel};

use super::Descriptor;

// `prob` is not range checked, values outside [0, 1] saturate in the kernel.

#[derive(Clone, Debug, PartialEq)]
pub struct RandomHorizontalFlipOperation {
    pub probability: f32,
}

impl RandomHorizontalFlipOperation {
    pub fn new(probability: f32) -> Self {
        Self { probability }
    }
}

impl Descriptor for RandomHorizontalFlipOperation {
    fn name(&self) -> &'static str {
        "RandomHorizontalFlip"
    }

    fn check(&self) -> Result<(), ParamError> {
        Ok(())
    }

    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        Arc::new(RandomFlipKernel::horizontal(self.probability, config))
    }

    fn config_string(&self) -> String {
        format!("prob={}", self.probability)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RandomVerticalFlipOperation {
    pub probability: f32,
}

impl RandomVerticalFlipOperation {
    pub fn new(probability: f32) -> Self {
        Self { probability }
    }
}

impl Descriptor for RandomVerticalFlipOperation {
    fn name(&self) -> &'static str {
        "RandomVerticalFlip"
    }

    fn check(&self) -> Result<(), ParamError> {
        Ok(())
    }

    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        Arc::new(RandomFlipKernel::vertical(self.probability, config))
    }

    fn config_string(&self) -> String {
        format!("prob={}", self.probability)
    }
}
