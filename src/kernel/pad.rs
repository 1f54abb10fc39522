use crate::error::Result;
use crate::tensor::Tensor;

use super::{non_negative, BorderType, KernelArgs, TensorKernel};

#[derive(Clone, Debug)]
pub struct PadKernel {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub mode: BorderType,
    pub fill: [u8; 3],
}

impl PadKernel {
    pub fn new(
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
        mode: BorderType,
        fill_r: u8,
        fill_g: u8,
        fill_b: u8,
    ) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            mode,
            fill: [fill_r, fill_g, fill_b],
        }
    }
}

impl TensorKernel for PadKernel {
    fn name(&self) -> &'static str {
        "Pad"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::Pad {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
            mode: self.mode,
            fill: self.fill,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let sides = Sides {
            top: non_negative(self.top, "top padding")?,
            bottom: non_negative(self.bottom, "bottom padding")?,
            left: non_negative(self.left, "left padding")?,
            right: non_negative(self.right, "right padding")?,
        };
        pad_tensor(input, &sides, self.mode, self.fill)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Sides {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

pub(crate) fn pad_tensor(input: &Tensor, sides: &Sides, mode: BorderType, fill: [u8; 3]) -> Result<Tensor> {
    let (height, width, _) = input.image_dims()?;
    // Nothing to mirror or extend from an empty image
    let mode = if height == 0 || width == 0 { BorderType::Constant } else { mode };

    let out_h = height + sides.top + sides.bottom;
    let out_w = width + sides.left + sides.right;
    input.remap(out_h, out_w, fill, |y, x| {
        let sy = mode.map_index(y as isize - sides.top as isize, height)?;
        let sx = mode.map_index(x as isize - sides.left as isize, width)?;
        Some((sy, sx))
    })
}
