use std::sync::Mutex;

use rand::rngs::StdRng;

use crate::config::KernelConfig;
use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

use super::{uniform, InterpolationMode, KernelArgs, TensorKernel};

// Rotates counter-clockwise by an angle drawn from [deg_lo, deg_hi].
// A negative center coordinate selects the image center. `expand` grows the
// canvas to fit the whole rotated image and always rotates about the center.
#[derive(Debug)]
pub struct RandomRotationKernel {
    pub degrees: (f32, f32),
    pub center: (f32, f32),
    pub interpolation: InterpolationMode,
    pub expand: bool,
    pub fill: [u8; 3],
    rng: Mutex<StdRng>,
}

impl RandomRotationKernel {
    pub fn new(
        deg_lo: f32,
        deg_hi: f32,
        center_x: f32,
        center_y: f32,
        interpolation: InterpolationMode,
        expand: bool,
        fill_r: u8,
        fill_g: u8,
        fill_b: u8,
        config: &KernelConfig,
    ) -> Self {
        Self {
            degrees: (deg_lo, deg_hi),
            center: (center_x, center_y),
            interpolation,
            expand,
            fill: [fill_r, fill_g, fill_b],
            rng: config.rng(),
        }
    }

    pub(crate) fn rotate(&self, input: &Tensor, degrees: f32) -> Result<Tensor> {
        let (height, width, _) = input.image_dims()?;
        let (sin, cos) = (degrees as f64).to_radians().sin_cos();

        let image_center = ((width as f64 - 1.0) / 2.0, (height as f64 - 1.0) / 2.0);
        let (src_cx, src_cy) = if self.expand || self.center.0 < 0.0 || self.center.1 < 0.0 {
            image_center
        } else {
            (self.center.0 as f64, self.center.1 as f64)
        };

        let (out_h, out_w) = if self.expand {
            // trig noise must not add a spurious row or column
            let fit = |v: f64| (v - 1e-6).ceil().max(0.0) as usize;
            let w = width as f64;
            let h = height as f64;
            (fit(w * sin.abs() + h * cos.abs()), fit(w * cos.abs() + h * sin.abs()))
        } else {
            (height, width)
        };
        let (dst_cx, dst_cy) = if self.expand {
            ((out_w as f64 - 1.0) / 2.0, (out_h as f64 - 1.0) / 2.0)
        } else {
            (src_cx, src_cy)
        };

        input.sample(out_h, out_w, self.fill, self.interpolation, |y, x| {
            let dx = x as f64 - dst_cx;
            let dy = y as f64 - dst_cy;
            let sx = src_cx + cos * dx - sin * dy;
            let sy = src_cy + sin * dx + cos * dy;
            (sy as f32, sx as f32)
        })
    }
}

impl TensorKernel for RandomRotationKernel {
    fn name(&self) -> &'static str {
        "RandomRotation"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::RandomRotation {
            degrees: self.degrees,
            center: self.center,
            interpolation: self.interpolation,
            expand: self.expand,
            fill: self.fill,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let degrees = {
            let mut rng = self.rng.lock().map_err(|_| TransformError::RngLockError)?;
            uniform(&mut *rng, self.degrees.0, self.degrees.1)
        };
        self.rotate(input, degrees)
    }
}
