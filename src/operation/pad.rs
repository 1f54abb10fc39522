use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{BorderType, PadKernel, TensorKernel};

use super::params::{check_len, expand_fill, expand_padding};
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct PadOperation {
    pub padding: Vec<i32>,
    pub fill_value: Vec<u8>,
    pub padding_mode: BorderType,
}

impl PadOperation {
    pub fn new(padding: Vec<i32>, fill_value: Vec<u8>, padding_mode: BorderType) -> Self {
        Self {
            padding,
            fill_value,
            padding_mode,
        }
    }
}

impl Descriptor for PadOperation {
    fn name(&self) -> &'static str {
        "Pad"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_len("padding", self.padding.len(), &[1, 2, 4])?;
        check_len("fill_value", self.fill_value.len(), &[1, 3])
    }

    fn build_kernel(&self, _config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let sides = expand_padding(&self.padding);
        let [r, g, b] = expand_fill(&self.fill_value);
        Arc::new(PadKernel::new(
            sides.top,
            sides.bottom,
            sides.left,
            sides.right,
            self.padding_mode,
            r,
            g,
            b,
        ))
    }

    fn config_string(&self) -> String {
        format!(
            "padding={:?}, fill_value={:?}, padding_mode={}",
            self.padding, self.fill_value, self.padding_mode
        )
    }
}
