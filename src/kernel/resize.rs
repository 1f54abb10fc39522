use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

use super::{resolve_size, InterpolationMode, KernelArgs, TensorKernel};

#[derive(Clone, Debug)]
pub struct ResizeKernel {
    pub height: i32,
    pub width: i32,
    pub interpolation: InterpolationMode,
}

impl ResizeKernel {
    pub fn new(height: i32, width: i32, interpolation: InterpolationMode) -> Self {
        Self {
            height,
            width,
            interpolation,
        }
    }
}

impl TensorKernel for ResizeKernel {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::Resize {
            height: self.height,
            width: self.width,
            interpolation: self.interpolation,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let (out_h, out_w) = resolve_size(self.height, self.width)?;
        let (height, width, _) = input.image_dims()?;
        if height == 0 || width == 0 {
            return Err(TransformError::InvalidShape {
                shape: input.shape().to_vec(),
                reason: "cannot resize an empty image".to_string(),
            });
        }

        let resized = input.to_dynamic_image()?.resize_exact(
            out_w as u32,
            out_h as u32,
            self.interpolation.filter_type(),
        );
        Ok(Tensor::from_dynamic_image(resized, input.desc.rank() == 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resizes_to_the_requested_size() {
        let t = Tensor::from_u8(vec![4, 6, 3], vec![50; 72]).unwrap();
        let out = ResizeKernel::new(2, 3, InterpolationMode::Bilinear).apply(&t).unwrap();
        assert_eq!(out.shape(), &[2, 3, 3]);
        assert!(out.as_u8().unwrap().iter().all(|&v| v == 50));
    }

    #[test]
    fn zero_width_resizes_to_a_square() {
        let t = Tensor::from_u8(vec![4, 6], vec![0; 24]).unwrap();
        let out = ResizeKernel::new(5, 0, InterpolationMode::Nearest).apply(&t).unwrap();
        assert_eq!(out.shape(), &[5, 5]);
    }

    #[test]
    fn nearest_upscale_replicates_pixels() {
        let t = Tensor::from_u8(vec![1, 2], vec![10, 20]).unwrap();
        let out = ResizeKernel::new(1, 4, InterpolationMode::Nearest).apply(&t).unwrap();
        let data = out.as_u8().unwrap();
        assert_eq!(data.len(), 4);
        assert!(data.iter().all(|&v| v == 10 || v == 20));
        assert_eq!((data[0], data[3]), (10, 20));
    }

    #[test]
    fn f32_rgb_stays_f32() {
        let t = Tensor::from_f32(vec![2, 2, 3], vec![0.25; 12]).unwrap();
        let out = ResizeKernel::new(4, 4, InterpolationMode::Bicubic).apply(&t).unwrap();
        assert_eq!(out.shape(), &[4, 4, 3]);
        assert!(out.as_f32().is_some());
    }
}
