use std::sync::Mutex;

use rand::rngs::StdRng;

use crate::config::KernelConfig;
use crate::error::{Result, TransformError};
use crate::tensor::{Tensor, TensorData};

use super::{uniform, KernelArgs, TensorKernel};

#[derive(Debug)]
pub struct RandomColorAdjustKernel {
    pub brightness: (f32, f32),
    pub contrast: (f32, f32),
    pub saturation: (f32, f32),
    pub hue: (f32, f32),
    rng: Mutex<StdRng>,
}

impl RandomColorAdjustKernel {
    pub fn new(
        brightness_lb: f32,
        brightness_ub: f32,
        contrast_lb: f32,
        contrast_ub: f32,
        saturation_lb: f32,
        saturation_ub: f32,
        hue_lb: f32,
        hue_ub: f32,
        config: &KernelConfig,
    ) -> Self {
        Self {
            brightness: (brightness_lb, brightness_ub),
            contrast: (contrast_lb, contrast_ub),
            saturation: (saturation_lb, saturation_ub),
            hue: (hue_lb, hue_ub),
            rng: config.rng(),
        }
    }
}

struct Factors {
    brightness: f32,
    contrast: f32,
    saturation: f32,
    hue: f32,
}

impl TensorKernel for RandomColorAdjustKernel {
    fn name(&self) -> &'static str {
        "RandomColorAdjust"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::RandomColorAdjust {
            brightness: self.brightness,
            contrast: self.contrast,
            saturation: self.saturation,
            hue: self.hue,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let (_, _, channels) = input.image_dims()?;
        if channels != 3 {
            return Err(TransformError::UnsupportedChannels {
                kernel: "RandomColorAdjust",
                channels,
            });
        }
        let data = input.as_u8().ok_or(TransformError::UnsupportedDataType {
            kernel: "RandomColorAdjust",
            dtype: input.data.dtype_name(),
        })?;

        let factors = {
            let mut rng = self.rng.lock().map_err(|_| TransformError::RngLockError)?;
            Factors {
                brightness: uniform(&mut *rng, self.brightness.0, self.brightness.1),
                contrast: uniform(&mut *rng, self.contrast.0, self.contrast.1),
                saturation: uniform(&mut *rng, self.saturation.0, self.saturation.1),
                hue: uniform(&mut *rng, self.hue.0, self.hue.1),
            }
        };

        let adjusted = adjust_colors(data, &factors);
        Tensor::new(input.desc.clone(), TensorData::U8(adjusted))
    }
}

fn gray(pixel: [f32; 3]) -> f32 {
    0.299 * pixel[0] + 0.587 * pixel[1] + 0.114 * pixel[2]
}

fn blend(pixel: [f32; 3], towards: [f32; 3], factor: f32) -> [f32; 3] {
    [0, 1, 2].map(|ch| (towards[ch] + factor * (pixel[ch] - towards[ch])).clamp(0.0, 255.0))
}

fn adjust_colors(data: &[u8], factors: &Factors) -> Vec<u8> {
    let mut pixels: Vec<[f32; 3]> = data
        .chunks_exact(3)
        .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
        .collect();

    for pixel in pixels.iter_mut() {
        *pixel = blend(*pixel, [0.0; 3], factors.brightness);
    }

    // contrast blends against the mean luminance of the whole image
    if !pixels.is_empty() {
        let mean = pixels.iter().map(|&p| gray(p)).sum::<f32>() / pixels.len() as f32;
        for pixel in pixels.iter_mut() {
            *pixel = blend(*pixel, [mean; 3], factors.contrast);
        }
    }

    for pixel in pixels.iter_mut() {
        let g = gray(*pixel);
        *pixel = blend(*pixel, [g; 3], factors.saturation);
    }

    if factors.hue != 0.0 {
        for pixel in pixels.iter_mut() {
            let (h, s, v) = rgb_to_hsv(*pixel);
            *pixel = hsv_to_rgb((h + factors.hue).rem_euclid(1.0), s, v);
        }
    }

    pixels
        .iter()
        .flat_map(|p| p.map(|v| v.round().clamp(0.0, 255.0) as u8))
        .collect()
}

// h, s, v in [0, 1]; rgb in [0, 255]
fn rgb_to_hsv([r, g, b]: [f32; 3]) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max / 255.0)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let sector = h * 6.0;
    let c = v * s;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}
