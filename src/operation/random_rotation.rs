use std::sync::Arc;

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::{InterpolationMode, RandomRotationKernel, TensorKernel};

use super::params::check_len;
use super::Descriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct RandomRotationOperation {
    pub degrees: Vec<f32>,
    pub resample: InterpolationMode,
    pub expand: bool,
    pub center: Vec<f32>,
    pub fill_value: Vec<u8>,
}

impl RandomRotationOperation {
    pub fn new(
        degrees: Vec<f32>,
        resample: InterpolationMode,
        expand: bool,
        center: Vec<f32>,
        fill_value: Vec<u8>,
    ) -> Self {
        Self {
            degrees,
            resample,
            expand,
            center,
            fill_value,
        }
    }
}

impl Descriptor for RandomRotationOperation {
    fn name(&self) -> &'static str {
        "RandomRotation"
    }

    fn check(&self) -> Result<(), ParamError> {
        check_len("degrees", self.degrees.len(), &[2])?;
        check_len("center", self.center.len(), &[2])?;
        check_len("fill_value", self.fill_value.len(), &[3])
    }

    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        let (degrees, center, fill) = (&self.degrees, &self.center, &self.fill_value);
        Arc::new(RandomRotationKernel::new(
            degrees[0],
            degrees[1],
            center[0],
            center[1],
            self.resample,
            self.expand,
            fill[0],
            fill[1],
            fill[2],
            config,
        ))
    }

    fn config_string(&self) -> String {
        format!(
            "degrees={:?}, resample={}, expand={}, center={:?}, fill_value={:?}",
            self.degrees, self.resample, self.expand, self.center, self.fill_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelArgs;

    fn op(degrees: Vec<f32>, center: Vec<f32>, fill: Vec<u8>) -> RandomRotationOperation {
        RandomRotationOperation::new(degrees, InterpolationMode::Nearest, false, center, fill)
    }

    #[test]
    fn lengths_are_exact() {
        assert!(op(vec![-30.0, 30.0], vec![-1.0, -1.0], vec![0; 3]).check().is_ok());
        assert!(op(vec![30.0], vec![-1.0, -1.0], vec![0; 3]).check().is_err());
        assert!(op(vec![-30.0, 30.0], vec![1.0, 2.0, 3.0], vec![0; 3]).check().is_err());
        assert!(op(vec![-30.0, 30.0], vec![-1.0, -1.0], vec![0]).check().is_err());
    }

    #[test]
    fn passes_parameters_through() {
        let kernel = op(vec![-10.0, 20.0], vec![4.0, 5.0], vec![1, 2, 3]).build_kernel(&KernelConfig::default());
        assert_eq!(
            kernel.args(),
            KernelArgs::RandomRotation {
                degrees: (-10.0, 20.0),
                center: (4.0, 5.0),
                interpolation: InterpolationMode::Nearest,
                expand: false,
                fill: [1, 2, 3],
            }
        );
    }
}
