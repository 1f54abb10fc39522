use image::{DynamicImage, ImageBuffer};

use crate::error::{Result, TransformError};

use super::{compute_tensor::Tensor, tensor_data::TensorData, tensor_desc::TensorDesc};

impl Tensor {
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        let (height, width, channels) = self.image_dims()?;
        let (w, h) = (width as u32, height as u32);

        let image = match (&self.data, channels) {
            (TensorData::U8(data), 1) => ImageBuffer::from_raw(w, h, data.clone()).map(DynamicImage::ImageLuma8),
            (TensorData::U8(data), 3) => ImageBuffer::from_raw(w, h, data.clone()).map(DynamicImage::ImageRgb8),
            (TensorData::U8(data), 4) => ImageBuffer::from_raw(w, h, data.clone()).map(DynamicImage::ImageRgba8),
            (TensorData::F32(data), 3) => ImageBuffer::from_raw(w, h, data.clone()).map(DynamicImage::ImageRgb32F),
            (TensorData::F32(data), 4) => ImageBuffer::from_raw(w, h, data.clone()).map(DynamicImage::ImageRgba32F),
            _ => {
                return Err(TransformError::UnsupportedChannels {
                    kernel: "image conversion",
                    channels,
                })
            }
        };

        image.ok_or_else(|| TransformError::InvalidShape {
            shape: self.desc.shape.clone(),
            reason: "buffer too small for image dimensions".to_string(),
        })
    }

    // `keep_rank2` keeps single channel images as [H, W]
    pub fn from_dynamic_image(image: DynamicImage, keep_rank2: bool) -> Self {
        let (h, w) = (image.height() as usize, image.width() as usize);
        let (data, channels) = match image {
            DynamicImage::ImageLuma8(buf) => (TensorData::U8(buf.into_raw()), 1),
            DynamicImage::ImageRgba8(buf) => (TensorData::U8(buf.into_raw()), 4),
            DynamicImage::ImageRgb32F(buf) => (TensorData::F32(buf.into_raw()), 3),
            DynamicImage::ImageRgba32F(buf) => (TensorData::F32(buf.into_raw()), 4),
            other => (TensorData::U8(other.into_rgb8().into_raw()), 3),
        };

        let desc = if channels == 1 && keep_rank2 {
            TensorDesc::new(vec![h, w])
        } else {
            TensorDesc::new_image(h, w, channels)
        };
        Self { desc, data }
    }
}
