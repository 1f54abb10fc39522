use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{TensorKernel, UniformAugKernel};

use super::{Descriptor, TensorOperation};

// Children are expected to come out of their own factories, they are not
// revalidated here or on build.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformAugOperation {
    pub transforms: Vec<Arc<TensorOperation>>,
    pub num_ops: i32,
}

impl UniformAugOperation {
    pub fn new(transforms: Vec<Arc<TensorOperation>>, num_ops: i32) -> Self {
        Self { transforms, num_ops }
    }
}

impl Descriptor for UniformAugOperation {
    fn name(&self) -> &'static str {
        "UniformAugment"
    }

    fn check(&self) -> Result<(), ParamError> {
        Ok(())
    }

    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let kernels = self
            .transforms
            .iter()
            .enumerate()
            .map(|(i, op)| op.build_with(&config.child(i)))
            .collect();
        Arc::new(UniformAugKernel::new(kernels, self.num_ops, config))
    }

    fn config_string(&self) -> String {
        let names: Vec<&str> = self.transforms.iter().map(|op| op.name()).collect();
        format!("transforms=[{}], num_ops={}", names.join(", "), self.num_ops)
    }
}
