#[derive(Clone, Debug, PartialEq)]
pub enum TensorData {
    U8(Vec<u8>),
    F32(Vec<f32>),
}

impl TensorData {
    pub fn len(&self) -> usize {
        match self {
            TensorData::U8(data) => data.len(),
            TensorData::F32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype_name(&self) -> &'static str {
        match self {
            TensorData::U8(_) => "u8",
            TensorData::F32(_) => "f32",
        }
    }

    pub fn to_f32(&self) -> Vec<f32> {
        match self {
            TensorData::U8(data) => data.iter().map(|&x| x as f32).collect(),
            TensorData::F32(data) => data.clone(),
        }
    }
}

// Element types a tensor can hold. Kernels that interpolate or blend go
// through f32 and convert back.
pub(crate) trait Element: Copy + Send + Sync + 'static {
    fn to_f32(self) -> f32;
    fn from_f32(value: f32) -> Self;
    fn from_u8(value: u8) -> Self;
}

impl Element for u8 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, 255.0) as u8
    }

    fn from_u8(value: u8) -> Self {
        value
    }
}

impl Element for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    fn from_u8(value: u8) -> Self {
        value as f32
    }
}
