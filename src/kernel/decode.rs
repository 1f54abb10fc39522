use crate::error::{Result, TransformError};
use crate::tensor::{Tensor, TensorData};

use super::{KernelArgs, TensorKernel};

// Decodes encoded image bytes (any format the image crate was built with)
// into a U8 [H, W, 3] tensor. `rgb == false` yields BGR channel order.
#[derive(Clone, Debug)]
pub struct DecodeKernel {
    pub rgb: bool,
}

impl DecodeKernel {
    pub fn new(rgb: bool) -> Self {
        Self { rgb }
    }
}

impl TensorKernel for DecodeKernel {
    fn name(&self) -> &'static str {
        "Decode"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::Decode { rgb: self.rgb }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let bytes = match &input.data {
            TensorData::U8(bytes) if input.desc.rank() == 1 => bytes,
            TensorData::U8(_) => {
                return Err(TransformError::InvalidShape {
                    shape: input.shape().to_vec(),
                    reason: "decode expects a rank 1 tensor of encoded bytes".to_string(),
                })
            }
            other => {
                return Err(TransformError::UnsupportedDataType {
                    kernel: "Decode",
                    dtype: other.dtype_name(),
                })
            }
        };

        let image = image::load_from_memory(bytes)?.into_rgb8();
        let mut decoded = Tensor::from_dynamic_image(image::DynamicImage::ImageRgb8(image), false);
        if !self.rgb {
            if let TensorData::U8(data) = &mut decoded.data {
                for pixel in data.chunks_exact_mut(3) {
                    pixel.swap(0, 2);
                }
            }
        }
        Ok(decoded)
    }
}
