use crate::error::{Result, TransformError};

// Images are laid out HWC. A rank-2 shape is a single channel image,
// rank-1 is reserved for encoded bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorDesc {
    pub shape: Vec<usize>,
}

impl TensorDesc {
    pub fn new(shape: Vec<usize>) -> Self {
        Self { shape }
    }

    pub fn new_image(height: usize, width: usize, channels: usize) -> Self {
        Self {
            shape: vec![height, width, channels],
        }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }

    // (height, width, channels) for rank 2 and rank 3 tensors
    pub fn image_dims(&self) -> Result<(usize, usize, usize)> {
        match self.shape.as_slice() {
            [h, w] => Ok((*h, *w, 1)),
            [h, w, c] => Ok((*h, *w, *c)),
            _ => Err(TransformError::InvalidShape {
                shape: self.shape.clone(),
                reason: "expected an HWC or HW image".to_string(),
            }),
        }
    }

    // Same rank as `self`, new spatial size
    pub fn with_size(&self, height: usize, width: usize) -> Self {
        let mut shape = self.shape.clone();
        shape[0] = height;
        shape[1] = width;
        Self { shape }
    }
}
