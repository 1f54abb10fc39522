use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{RandomColorAdjustKernel, TensorKernel};

use super::params::{check_one_or_two, expand_range};
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct RandomColorAdjustOperation {
    pub brightness: Vec<f32>,
    pub contrast: Vec<f32>,
    pub saturation: Vec<f32>,
    pub hue: Vec<f32>,
}

impl RandomColorAdjustOperation {
    pub fn new(brightness: Vec<f32>, contrast: Vec<f32>, saturation: Vec<f32>, hue: Vec<f32>) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
            hue,
        }
    }
}

impl Descriptor for RandomColorAdjustOperation {
    fn name(&self) -> &'static str {
        "RandomColorAdjust"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_one_or_two("brightness", self.brightness.len())?;
        check_one_or_two("contrast", self.contrast.len())?;
        check_one_or_two("saturation", self.saturation.len())?;
        check_one_or_two("hue", self.hue.len())
    }

    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let (brightness_lb, brightness_ub) = expand_range(&self.brightness);
        let (contrast_lb, contrast_ub) = expand_range(&self.contrast);
        let (saturation_lb, saturation_ub) = expand_range(&self.saturation);
        let (hue_lb, hue_ub) = expand_range(&self.hue);
        Arc::new(RandomColorAdjustKernel::new(
            brightness_lb,
            brightness_ub,
            contrast_lb,
            contrast_ub,
            saturation_lb,
            saturation_ub,
            hue_lb,
            hue_ub,
            config,
        ))
    }

    fn config_string(&self) -> String {
        format!(
            "brightness={:?}, contrast={:?}, saturation={:?}, hue={:?}",
            self.brightness, self.contrast, self.saturation, self.hue
        )
    }
}
