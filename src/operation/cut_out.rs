use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{CutOutKernel, TensorKernel};

use super::params::check_non_negative;
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct CutOutOperation {
    pub length: i32,
    pub num_patches: i32,
}

impl CutOutOperation {
    pub fn new(length: i32, num_patches: i32) -> Self {
        Self { length, num_patches }
    }
}

impl Descriptor for CutOutOperation {
    fn name(&self) -> &'static str {
        "CutOut"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_non_negative("length", self.length)?;
        check_non_negative("num_patches", self.num_patches)
    }

    // Square boxes, fixed black fill
    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        Arc::new(CutOutKernel::new(
            self.length,
            self.length,
            self.num_patches,
            false,
            0,
            0,
            0,
            config,
        ))
    }

    fn config_string(&self) -> String {
        format!("length={}, num_patches={}", self.length, self.num_patches)
    }
}
