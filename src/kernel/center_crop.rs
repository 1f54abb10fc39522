use crate::error::Result;
use crate::tensor::Tensor;

use super::{resolve_size, KernelArgs, TensorKernel};

#[derive(Clone, Debug)]
pub struct CenterCropKernel {
    pub crop_h: i32,
    pub crop_w: i32,
}

impl CenterCropKernel {
    pub fn new(crop_h: i32, crop_w: i32) -> Self {
        Self { crop_h, crop_w }
    }
}

impl TensorKernel for CenterCropKernel {
    fn name(&self) -> &'static str {
        "CenterCrop"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::CenterCrop {
            crop_h: self.crop_h,
            crop_w: self.crop_w,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let (out_h, out_w) = resolve_size(self.crop_h, self.crop_w)?;
        let (height, width, _) = input.image_dims()?;

        // Offsets go negative when the crop is larger than the image,
        // the uncovered border is zero filled.
        let top = (height as isize - out_h as isize) / 2;
        let left = (width as isize - out_w as isize) / 2;

        input.remap(out_h, out_w, [0, 0, 0], |y, x| {
            let sy = y as isize + top;
            let sx = x as isize + left;
            if (0..height as isize).contains(&sy) && (0..width as isize).contains(&sx) {
                Some((sy as usize, sx as usize))
            } else {
                None
            }
        })
    }
}
