use crate::error::{Result, TransformError};
use crate::tensor::{Tensor, TensorData};

use super::{KernelArgs, TensorKernel};

#[derive(Clone, Debug)]
pub struct NormalizeKernel {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl NormalizeKernel {
    pub fn new(mean_r: f32, mean_g: f32, mean_b: f32, std_r: f32, std_g: f32, std_b: f32) -> Self {
        Self {
            mean: [mean_r, mean_g, mean_b],
            std: [std_r, std_g, std_b],
        }
    }
}

impl TensorKernel for NormalizeKernel {
    fn name(&self) -> &'static str {
        "Normalize"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::Normalize {
            mean: self.mean,
            std: self.std,
        }
    }

    // Output is always F32, whatever the input element type
    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let (_, _, channels) = input.image_dims()?;
        if channels != 3 {
            return Err(TransformError::UnsupportedChannels {
                kernel: "Normalize",
                channels,
            });
        }
        if self.std.iter().any(|&s| s == 0.0) {
            return Err(TransformError::InvalidParameter("std cannot contain zero".to_string()));
        }

        let mut data = input.data.to_f32();
        for pixel in data.chunks_exact_mut(3) {
            for (ch, value) in pixel.iter_mut().enumerate() {
                *value = (*value - self.mean[ch]) / self.std[ch];
            }
        }
        Tensor::new(input.desc.clone(), TensorData::F32(data))
    }
}
