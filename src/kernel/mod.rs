pub mod center_crop;
pub mod cut_out;
pub mod decode;
pub mod normalize;
pub mod pad;
pub mod random_color_adjust;
pub mod random_crop;
pub mod random_flip;
pub mod random_rotation;
pub mod resize;
pub mod types;
pub mod uniform_aug;

use std::fmt;

use rayon::prelude::*;

use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

pub use center_crop::CenterCropKernel;
pub use cut_out::CutOutKernel;
pub use decode::DecodeKernel;
pub use normalize::NormalizeKernel;
pub use pad::PadKernel;
pub use random_color_adjust::RandomColorAdjustKernel;
pub use random_crop::RandomCropKernel;
pub use random_flip::{FlipAxis, RandomFlipKernel};
pub use random_rotation::RandomRotationKernel;
pub use resize::ResizeKernel;
pub use types::{BorderType, InterpolationMode};
pub use uniform_aug::UniformAugKernel;

pub trait TensorKernel: Send + Sync + fmt::Debug {
    // Operator name, matches the descriptor that built this kernel
    fn name(&self) -> &'static str;

    // The normalized arguments this kernel was constructed with
    fn args(&self) -> KernelArgs;

    fn apply(&self, input: &Tensor) -> Result<Tensor>;

    // Apply to every tensor of a batch. Output order follows input order.
    fn apply_batch(&self, inputs: &[Tensor]) -> Result<Vec<Tensor>> {
        inputs.par_iter().map(|input| self.apply(input)).collect()
    }
}

// Fully expanded constructor arguments, one arm per kernel.
#[derive(Clone, Debug, PartialEq)]
pub enum KernelArgs {
    CenterCrop {
        crop_h: i32,
        crop_w: i32,
    },
    CutOut {
        box_h: i32,
        box_w: i32,
        num_patches: i32,
        is_random: bool,
        fill: [u8; 3],
    },
    Decode {
        rgb: bool,
    },
    Normalize {
        mean: [f32; 3],
        std: [f32; 3],
    },
    Pad {
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
        mode: BorderType,
        fill: [u8; 3],
    },
    RandomColorAdjust {
        brightness: (f32, f32),
        contrast: (f32, f32),
        saturation: (f32, f32),
        hue: (f32, f32),
    },
    RandomCrop {
        crop_h: i32,
        crop_w: i32,
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
        mode: BorderType,
        pad_if_needed: bool,
        fill: [u8; 3],
    },
    RandomHorizontalFlip {
        prob: f32,
    },
    RandomVerticalFlip {
        prob: f32,
    },
    RandomRotation {
        degrees: (f32, f32),
        center: (f32, f32),
        interpolation: InterpolationMode,
        expand: bool,
        fill: [u8; 3],
    },
    Resize {
        height: i32,
        width: i32,
        interpolation: InterpolationMode,
    },
    UniformAugment {
        transforms: Vec<KernelArgs>,
        num_ops: i32,
    },
}

// Resolves the (h, w) pair handed to size-taking kernels.
// A width of 0 means "same as height".
pub(crate) fn resolve_size(height: i32, width: i32) -> Result<(usize, usize)> {
    let width = if width == 0 { height } else { width };
    if height <= 0 || width <= 0 {
        return Err(TransformError::InvalidParameter(format!(
            "size must be positive, got {}x{}",
            height, width
        )));
    }
    Ok((height as usize, width as usize))
}

pub(crate) fn non_negative(value: i32, what: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| TransformError::InvalidParameter(format!("{} cannot be negative: {}", what, value)))
}

// Uniform draw from [lb, ub]. Tolerates lb > ub and lb == ub.
pub(crate) fn uniform(rng: &mut impl rand::Rng, lb: f32, ub: f32) -> f32 {
    lb + (ub - lb) * rng.gen::<f32>()
}
