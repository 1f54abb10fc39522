use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::KernelConfig;
use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

use super::{KernelArgs, TensorKernel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    Horizontal,
    Vertical,
}

// Mirrors the image along `axis` with probability `prob`
#[derive(Debug)]
pub struct RandomFlipKernel {
    pub axis: FlipAxis,
    pub prob: f32,
    rng: Mutex<StdRng>,
}

impl RandomFlipKernel {
    pub fn horizontal(prob: f32, config: &KernelConfig) -> Self {
        Self {
            axis: FlipAxis::Horizontal,
            prob,
            rng: config.rng(),
        }
    }

    pub fn vertical(prob: f32, config: &KernelConfig) -> Self {
        Self {
            axis: FlipAxis::Vertical,
            prob,
            rng: config.rng(),
        }
    }
}

impl TensorKernel for RandomFlipKernel {
    fn name(&self) -> &'static str {
        match self.axis {
            FlipAxis::Horizontal => "RandomHorizontalFlip",
            FlipAxis::Vertical => "RandomVerticalFlip",
        }
    }

    fn args(&self) -> KernelArgs {
        match self.axis {
            FlipAxis::Horizontal => KernelArgs::RandomHorizontalFlip { prob: self.prob },
            FlipAxis::Vertical => KernelArgs::RandomVerticalFlip { prob: self.prob },
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let (height, width, _) = input.image_dims()?;
        let flip = {
            let mut rng = self.rng.lock().map_err(|_| TransformError::RngLockError)?;
            rng.gen::<f32>() < self.prob
        };
        if !flip {
            return Ok(input.clone());
        }

        match self.axis {
            FlipAxis::Horizontal => input.remap(height, width, [0; 3], |y, x| Some((y, width - 1 - x))),
            FlipAxis::Vertical => input.remap(height, width, [0; 3], |y, x| Some((height - 1 - y, x))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Tensor {
        Tensor::from_u8(vec![2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn certain_horizontal_flip_mirrors_columns() {
        let out = RandomFlipKernel::horizontal(1.0, &KernelConfig::default()).apply(&grid()).unwrap();
        assert_eq!(out.as_u8().unwrap(), &[3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn certain_vertical_flip_mirrors_rows() {
        let out = RandomFlipKernel::vertical(1.0, &KernelConfig::default()).apply(&grid()).unwrap();
        assert_eq!(out.as_u8().unwrap(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn zero_probability_never_flips() {
        let kernel = RandomFlipKernel::horizontal(0.0, &KernelConfig::default());
        for _ in 0..16 {
            assert_eq!(kernel.apply(&grid()).unwrap(), grid());
        }
    }

    #[test]
    fn names_follow_the_axis() {
        let config = KernelConfig::default();
        assert_eq!(RandomFlipKernel::horizontal(0.5, &config).name(), "RandomHorizontalFlip");
        assert_eq!(
            RandomFlipKernel::vertical(0.5, &config).args(),
            KernelArgs::RandomVerticalFlip { prob: 0.5 }
        );
    }
}
