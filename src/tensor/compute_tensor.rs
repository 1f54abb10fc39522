use crate::error::{Result, TransformError};
use crate::kernel::InterpolationMode;

use super::{tensor_data::{Element, TensorData}, tensor_desc::TensorDesc};

#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    pub desc: TensorDesc,
    pub data: TensorData,
}

impl Tensor {
    pub fn new(desc: TensorDesc, data: TensorData) -> Result<Self> {
        if desc.num_elements() != data.len() {
            return Err(TransformError::InvalidShape {
                shape: desc.shape,
                reason: format!("shape does not match {} elements of data", data.len()),
            });
        }
        Ok(Self { desc, data })
    }

    pub fn from_u8(shape: Vec<usize>, data: Vec<u8>) -> Result<Self> {
        Self::new(TensorDesc::new(shape), TensorData::U8(data))
    }

    pub fn from_f32(shape: Vec<usize>, data: Vec<f32>) -> Result<Self> {
        Self::new(TensorDesc::new(shape), TensorData::F32(data))
    }

    // Undecoded image file contents
    pub fn encoded(bytes: Vec<u8>) -> Self {
        Self {
            desc: TensorDesc::new(vec![bytes.len()]),
            data: TensorData::U8(bytes),
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.desc.shape
    }

    pub fn image_dims(&self) -> Result<(usize, usize, usize)> {
        self.desc.image_dims()
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match &self.data {
            TensorData::U8(data) => Some(data),
            TensorData::F32(_) => None,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.data {
            TensorData::F32(data) => Some(data),
            TensorData::U8(_) => None,
        }
    }

    // Output pixel (y, x) copies source pixel `src(y, x)`, or the fill colour
    // when it maps outside the source. Returned coordinates must be in bounds.
    pub(crate) fn remap<F>(&self, out_h: usize, out_w: usize, fill: [u8; 3], src: F) -> Result<Tensor>
    where
        F: Fn(usize, usize) -> Option<(usize, usize)>,
    {
        let (_, width, channels) = self.image_dims()?;
        let data = match &self.data {
            TensorData::U8(data) => TensorData::U8(remap_slice(data, width, channels, out_h, out_w, fill, &src)),
            TensorData::F32(data) => TensorData::F32(remap_slice(data, width, channels, out_h, out_w, fill, &src)),
        };
        Ok(Tensor {
            desc: self.desc.with_size(out_h, out_w),
            data,
        })
    }

    // Like `remap` but with fractional source coordinates
    pub(crate) fn sample<F>(
        &self,
        out_h: usize,
        out_w: usize,
        fill: [u8; 3],
        interpolation: InterpolationMode,
        src: F,
    ) -> Result<Tensor>
    where
        F: Fn(f32, f32) -> (f32, f32),
    {
        let dims = self.image_dims()?;
        let data = match &self.data {
            TensorData::U8(data) => {
                TensorData::U8(sample_slice(data, dims, out_h, out_w, fill, interpolation, &src))
            }
            TensorData::F32(data) => {
                TensorData::F32(sample_slice(data, dims, out_h, out_w, fill, interpolation, &src))
            }
        };
        Ok(Tensor {
            desc: self.desc.with_size(out_h, out_w),
            data,
        })
    }

    // Paint the box [top, top + h) x [left, left + w), clipped to the image
    pub(crate) fn fill_region(&mut self, top: usize, left: usize, h: usize, w: usize, fill: [u8; 3]) -> Result<()> {
        let (height, width, channels) = self.image_dims()?;
        let region = Region {
            top: top.min(height),
            left: left.min(width),
            bottom: top.saturating_add(h).min(height),
            right: left.saturating_add(w).min(width),
        };
        match &mut self.data {
            TensorData::U8(data) => fill_slice(data, width, channels, &region, fill),
            TensorData::F32(data) => fill_slice(data, width, channels, &region, fill),
        }
        Ok(())
    }
}

struct Region {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

fn channel_fill<T: Element>(fill: [u8; 3], channels: usize) -> Vec<T> {
    (0..channels)
        .map(|ch| T::from_u8(fill.get(ch).copied().unwrap_or(0)))
        .collect()
}

fn remap_slice<T: Element, F>(
    data: &[T],
    width: usize,
    channels: usize,
    out_h: usize,
    out_w: usize,
    fill: [u8; 3],
    src: &F,
) -> Vec<T>
where
    F: Fn(usize, usize) -> Option<(usize, usize)>,
{
    let fill = channel_fill::<T>(fill, channels);
    let mut out = Vec::with_capacity(out_h * out_w * channels);
    for y in 0..out_h {
        for x in 0..out_w {
            match src(y, x) {
                Some((sy, sx)) => {
                    let base = (sy * width + sx) * channels;
                    out.extend_from_slice(&data[base..base + channels]);
                }
                None => out.extend_from_slice(&fill),
            }
        }
    }
    out
}

fn sample_slice<T: Element, F>(
    data: &[T],
    (height, width, channels): (usize, usize, usize),
    out_h: usize,
    out_w: usize,
    fill: [u8; 3],
    interpolation: InterpolationMode,
    src: &F,
) -> Vec<T>
where
    F: Fn(f32, f32) -> (f32, f32),
{
    let fill = channel_fill::<T>(fill, channels);
    let mut out = Vec::with_capacity(out_h * out_w * channels);
    if height == 0 || width == 0 {
        for _ in 0..out_h * out_w {
            out.extend_from_slice(&fill);
        }
        return out;
    }

    let at = |y: usize, x: usize, ch: usize| data[(y * width + x) * channels + ch].to_f32();
    let clamp_y = |v: f32| (v.max(0.0) as usize).min(height - 1);
    let clamp_x = |v: f32| (v.max(0.0) as usize).min(width - 1);

    for y in 0..out_h {
        for x in 0..out_w {
            let (sy, sx) = src(y as f32, x as f32);
            if sy < -0.5 || sx < -0.5 || sy > height as f32 - 0.5 || sx > width as f32 - 0.5 {
                out.extend_from_slice(&fill);
                continue;
            }
            match interpolation {
                InterpolationMode::Nearest => {
                    let base = (clamp_y(sy.round()) * width + clamp_x(sx.round())) * channels;
                    out.extend_from_slice(&data[base..base + channels]);
                }
                // Bicubic falls back to bilinear for arbitrary warps
                InterpolationMode::Bilinear | InterpolationMode::Bicubic => {
                    let (fy, fx) = (sy.floor(), sx.floor());
                    let (dy, dx) = (sy - fy, sx - fx);
                    let (y0, y1) = (clamp_y(fy), clamp_y(fy + 1.0));
                    let (x0, x1) = (clamp_x(fx), clamp_x(fx + 1.0));
                    for ch in 0..channels {
                        let value = at(y0, x0, ch) * (1.0 - dx) * (1.0 - dy)
                            + at(y0, x1, ch) * dx * (1.0 - dy)
                            + at(y1, x0, ch) * (1.0 - dx) * dy
                            + at(y1, x1, ch) * dx * dy;
                        out.push(T::from_f32(value));
                    }
                }
            }
        }
    }
    out
}

fn fill_slice<T: Element>(data: &mut [T], width: usize, channels: usize, region: &Region, fill: [u8; 3]) {
    let fill = channel_fill::<T>(fill, channels);
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            let base = (y * width + x) * channels;
            data[base..base + channels].copy_from_slice(&fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(h: usize, w: usize) -> Tensor {
        Tensor::from_u8(vec![h, w], (0..(h * w) as u8).collect()).unwrap()
    }

    #[test]
    fn new_rejects_mismatched_data() {
        assert!(Tensor::from_u8(vec![2, 2, 3], vec![0; 11]).is_err());
        assert!(Tensor::from_f32(vec![2, 2], vec![0.0; 4]).is_ok());
    }

    #[test]
    fn remap_copies_and_fills() {
        let t = ramp(2, 2);
        // shift right by one, fill the vacated column
        let out = t
            .remap(2, 2, [9, 9, 9], |y, x| if x == 0 { None } else { Some((y, x - 1)) })
            .unwrap();
        assert_eq!(out.as_u8().unwrap(), &[9, 0, 9, 2]);
    }

    #[test]
    fn sample_identity_is_lossless() {
        let t = ramp(3, 3);
        for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
            let out = t.sample(3, 3, [0, 0, 0], mode, |y, x| (y, x)).unwrap();
            assert_eq!(out, t);
        }
    }

    #[test]
    fn bilinear_sample_blends_neighbours() {
        let t = Tensor::from_f32(vec![1, 2], vec![0.0, 10.0]).unwrap();
        let out = t
            .sample(1, 1, [0, 0, 0], InterpolationMode::Bilinear, |_, _| (0.0, 0.5))
            .unwrap();
        assert_eq!(out.as_f32().unwrap(), &[5.0]);
    }

    #[test]
    fn fill_region_is_clipped() {
        let mut t = Tensor::from_u8(vec![2, 2, 3], vec![1; 12]).unwrap();
        t.fill_region(1, 1, 5, 5, [7, 8, 9]).unwrap();
        let data = t.as_u8().unwrap();
        assert_eq!(&data[0..9], &[1; 9]);
        assert_eq!(&data[9..12], &[7, 8, 9]);
    }
}
