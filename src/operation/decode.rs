use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{DecodeKernel, TensorKernel};

use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct DecodeOperation {
    pub rgb: bool,
}

impl DecodeOperation {
    pub fn new(rgb: bool) -> Self {
        Self { rgb }
    }
}

impl Descriptor for DecodeOperation {
    fn name(&self) -> &'static str {
        "Decode"
    }

    fn check(&self) -> Result<(), ParamError> {
        Ok(())
    }

    fn build_kernel(&self, _config: &KernelConfig) -> Arc<dyn TensorKernel> {
        Arc::new(DecodeKernel::new(self.rgb))
    }

    fn config_string(&self) -> String {
        format!("rgb={}", self.rgb)
    }
}
