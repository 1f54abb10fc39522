use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{NormalizeKernel, TensorKernel};

use super::params::check_len;
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizeOperation {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl NormalizeOperation {
    pub fn new(mean: Vec<f32>, std: Vec<f32>) -> Self {
        Self { mean, std }
    }
}

impl Descriptor for NormalizeOperation {
    fn name(&self) -> &'static str {
        "Normalize"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_len("mean", self.mean.len(), &[3])?;
        check_len("std", self.std.len(), &[3])
    }

    fn build_kernel(&self, _config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let (mean, std) = (&self.mean, &self.std);
        Arc::new(NormalizeKernel::new(mean[0], mean[1], mean[2], std[0], std[1], std[2]))
    }

    fn config_string(&self) -> String {
        format!("mean={:?}, std={:?}", self.mean, self.std)
    }
}
