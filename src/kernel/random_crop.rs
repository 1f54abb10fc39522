use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::KernelConfig;
use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

use super::pad::{pad_tensor, Sides};
use super::{non_negative, resolve_size, BorderType, KernelArgs, TensorKernel};

#[derive(Debug)]
pub struct RandomCropKernel {
    pub crop_h: i32,
    pub crop_w: i32,
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub mode: BorderType,
    pub pad_if_needed: bool,
    pub fill: [u8; 3],
    rng: Mutex<StdRng>,
}

impl RandomCropKernel {
    pub fn new(
        crop_h: i32,
        crop_w: i32,
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
        mode: BorderType,
        pad_if_needed: bool,
        fill_r: u8,
        fill_g: u8,
        fill_b: u8,
        config: &KernelConfig,
    ) -> Self {
        Self {
            crop_h,
            crop_w,
            top,
            bottom,
            left,
            right,
            mode,
            pad_if_needed,
            fill: [fill_r, fill_g, fill_b],
            rng: config.rng(),
        }
    }

    fn padding(&self, height: usize, width: usize, crop_h: usize, crop_w: usize) -> Result<Sides> {
        let mut sides = Sides {
            top: non_negative(self.top, "top padding")?,
            bottom: non_negative(self.bottom, "bottom padding")?,
            left: non_negative(self.left, "left padding")?,
            right: non_negative(self.right, "right padding")?,
        };

        // Grow both sides evenly until the crop fits
        if self.pad_if_needed {
            let padded_h = height + sides.top + sides.bottom;
            if padded_h < crop_h {
                let missing = crop_h - padded_h;
                sides.top += missing / 2;
                sides.bottom += missing - missing / 2;
            }
            let padded_w = width + sides.left + sides.right;
            if padded_w < crop_w {
                let missing = crop_w - padded_w;
                sides.left += missing / 2;
                sides.right += missing - missing / 2;
            }
        }
        Ok(sides)
    }
}

impl TensorKernel for RandomCropKernel {
    fn name(&self) -> &'static str {
        "RandomCrop"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::RandomCrop {
            crop_h: self.crop_h,
            crop_w: self.crop_w,
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
            mode: self.mode,
            pad_if_needed: self.pad_if_needed,
            fill: self.fill,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let (crop_h, crop_w) = resolve_size(self.crop_h, self.crop_w)?;
        let (height, width, _) = input.image_dims()?;

        let sides = self.padding(height, width, crop_h, crop_w)?;
        let padded = if sides == Sides::default() {
            input.clone()
        } else {
            pad_tensor(input, &sides, self.mode, self.fill)?
        };

        let (padded_h, padded_w, _) = padded.image_dims()?;
        if padded_h < crop_h || padded_w < crop_w {
            return Err(TransformError::CropTooLarge {
                crop_h,
                crop_w,
                height: padded_h,
                width: padded_w,
            });
        }

        let (top, left) = {
            let mut rng = self.rng.lock().map_err(|_| TransformError::RngLockError)?;
            (rng.gen_range(0..=padded_h - crop_h), rng.gen_range(0..=padded_w - crop_w))
        };
        padded.remap(crop_h, crop_w, self.fill, |y, x| Some((y + top, x + left)))
    }
}
