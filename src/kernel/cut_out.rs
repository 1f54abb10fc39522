use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::KernelConfig;
use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

use super::{non_negative, KernelArgs, TensorKernel};

// Erases `num_patches` boxes at random positions. With `is_random` set every
// box gets a random colour, otherwise the fixed fill colour is used.
#[derive(Debug)]
pub struct CutOutKernel {
    pub box_h: i32,
    pub box_w: i32,
    pub num_patches: i32,
    pub is_random: bool,
    pub fill: [u8; 3],
    rng: Mutex<StdRng>,
}

impl CutOutKernel {
    pub fn new(
        box_h: i32,
        box_w: i32,
        num_patches: i32,
        is_random: bool,
        fill_r: u8,
        fill_g: u8,
        fill_b: u8,
        config: &KernelConfig,
    ) -> Self {
        Self {
            box_h,
            box_w,
            num_patches,
            is_random,
            fill: [fill_r, fill_g, fill_b],
            rng: config.rng(),
        }
    }
}

impl TensorKernel for CutOutKernel {
    fn name(&self) -> &'static str {
        "CutOut"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::CutOut {
            box_h: self.box_h,
            box_w: self.box_w,
            num_patches: self.num_patches,
            is_random: self.is_random,
            fill: self.fill,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let box_h = non_negative(self.box_h, "box height")?;
        let box_w = non_negative(self.box_w, "box width")?;
        let patches = non_negative(self.num_patches, "number of patches")?;
        let (height, width, _) = input.image_dims()?;

        let mut output = input.clone();
        let mut rng = self.rng.lock().map_err(|_| TransformError::RngLockError)?;
        for _ in 0..patches {
            let top = rng.gen_range(0..=height.saturating_sub(box_h));
            let left = rng.gen_range(0..=width.saturating_sub(box_w));
            let fill = if self.is_random { rng.gen() } else { self.fill };
            output.fill_region(top, left, box_h, box_w, fill)?;
        }
        Ok(output)
    }
}
