pub mod compute_tensor;
pub mod image_conv;
pub mod tensor_data;
pub mod tensor_desc;

pub use compute_tensor::Tensor;
pub use tensor_data::TensorData;
pub use tensor_desc::TensorDesc;
