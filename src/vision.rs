use std::sync::Arc;

use crate::kernel::{BorderType, InterpolationMode};
use crate::operation::*;

// Every factory validates before handing the descriptor out. A failed check
// has already been logged, so callers only see `None`.
fn validated(op: TensorOperation) -> Option<Arc<TensorOperation>> {
    if op.validate() {
        Some(Arc::new(op))
    } else {
        None
    }
}

/// Crops the center of the image. `size` is `[edge]` for a square or `[height, width]`.
pub fn center_crop(size: Vec<i32>) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::CenterCrop(CenterCropOperation::new(size)))
}

/// Erases `num_patches` random square boxes of side `length`.
pub fn cut_out(length: i32, num_patches: i32) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::CutOut(CutOutOperation::new(length, num_patches)))
}

/// Decodes encoded image bytes, in RGB order when `rgb` is set and BGR otherwise.
pub fn decode(rgb: bool) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::Decode(DecodeOperation::new(rgb)))
}

pub fn normalize(mean: Vec<f32>, std: Vec<f32>) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::Normalize(NormalizeOperation::new(mean, std)))
}

/// Pads the image borders.
///
/// `padding` is `[all]`, `[left_right, top_bottom]` or `[left, top, right, bottom]`.
/// `fill_value` is `[value]` or `[r, g, b]` and only matters for [`BorderType::Constant`].
pub fn pad(padding: Vec<i32>, fill_value: Vec<u8>, padding_mode: BorderType) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::Pad(PadOperation::new(padding, fill_value, padding_mode)))
}

/// Each argument is `[value]` for a fixed factor or `[lb, ub]` for a uniform range.
pub fn random_color_adjust(
    brightness: Vec<f32>,
    contrast: Vec<f32>,
    saturation: Vec<f32>,
    hue: Vec<f32>,
) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::RandomColorAdjust(RandomColorAdjustOperation::new(
        brightness, contrast, saturation, hue,
    )))
}

/// `padding` is `[top, bottom, left, right]`, `fill_value` is `[r, g, b]`.
pub fn random_crop(
    size: Vec<i32>,
    padding: Vec<i32>,
    pad_if_needed: bool,
    fill_value: Vec<u8>,
) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::RandomCrop(RandomCropOperation::new(
        size,
        padding,
        pad_if_needed,
        fill_value,
    )))
}

pub fn random_horizontal_flip(prob: f32) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::RandomHorizontalFlip(RandomHorizontalFlipOperation::new(prob)))
}

/// Rotates by an angle drawn from `degrees = [lo, hi]`.
///
/// A negative `center` coordinate rotates about the image center.
pub fn random_rotation(
    degrees: Vec<f32>,
    resample: InterpolationMode,
    expand: bool,
    center: Vec<f32>,
    fill_value: Vec<u8>,
) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::RandomRotation(RandomRotationOperation::new(
        degrees, resample, expand, center, fill_value,
    )))
}

pub fn random_vertical_flip(prob: f32) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::RandomVerticalFlip(RandomVerticalFlipOperation::new(prob)))
}

pub fn resize(size: Vec<i32>, interpolation: InterpolationMode) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::Resize(ResizeOperation::new(size, interpolation)))
}

/// Applies `num_ops` distinct transforms picked uniformly from `transforms`.
pub fn uniform_augment(transforms: Vec<Arc<TensorOperation>>, num_ops: i32) -> Option<Arc<TensorOperation>> {
    validated(TensorOperation::UniformAugment(UniformAugOperation::new(transforms, num_ops)))
}
