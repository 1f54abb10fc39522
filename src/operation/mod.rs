pub mod center_crop;
pub mod cut_out;
pub mod decode;
pub mod normalize;
pub mod pad;
pub(crate) mod params;
pub mod random_color_adjust;
pub mod random_crop;
pub mod random_flip;
pub mod random_rotation;
pub mod resize;
pub mod uniform_aug;

use std::fmt;
use std::sync::Arc;

use log::{debug, error};

use crate::config::KernelConfig;
use crate::error::ParamError;
use crate::kernel::TensorKernel;

pub use center_crop::CenterCropOperation;
pub use cut_out::CutOutOperation;
pub use decode::DecodeOperation;
pub use normalize::NormalizeOperation;
pub use pad::PadOperation;
pub use random_color_adjust::RandomColorAdjustOperation;
pub use random_crop::RandomCropOperation;
pub use random_flip::{RandomHorizontalFlipOperation, RandomVerticalFlipOperation};
pub use random_rotation::RandomRotationOperation;
pub use resize::ResizeOperation;
pub use uniform_aug::UniformAugOperation;

// What every descriptor arm knows how to do
pub(crate) trait Descriptor {
    fn name(&self) -> &'static str;

    fn check(&self) -> Result<(), ParamError>;

    // Caller guarantees `check()` passed
    fn build_kernel(&self, config: &KernelConfig) -> Arc<dyn TensorKernel>;

    fn config_string(&self) -> String;
}

// Declarative description of one vision transform. Parameters are stored as
// given and never change after construction.
#[derive(Clone, Debug, PartialEq)]
pub enum TensorOperation {
    CenterCrop(CenterCropOperation),
    CutOut(CutOutOperation),
    Decode(DecodeOperation),
    Normalize(NormalizeOperation),
    Pad(PadOperation),
    RandomColorAdjust(RandomColorAdjustOperation),
    RandomCrop(RandomCropOperation),
    RandomHorizontalFlip(RandomHorizontalFlipOperation),
    RandomRotation(RandomRotationOperation),
    RandomVerticalFlip(RandomVerticalFlipOperation),
    Resize(ResizeOperation),
    UniformAugment(UniformAugOperation),
}

impl TensorOperation {
    fn descriptor(&self) -> &dyn Descriptor {
        match self {
            TensorOperation::CenterCrop(op) => op,
            TensorOperation::CutOut(op) => op,
            TensorOperation::Decode(op) => op,
            TensorOperation::Normalize(op) => op,
            TensorOperation::Pad(op) => op,
            TensorOperation::RandomColorAdjust(op) => op,
            TensorOperation::RandomCrop(op) => op,
            TensorOperation::RandomHorizontalFlip(op) => op,
            TensorOperation::RandomRotation(op) => op,
            TensorOperation::RandomVerticalFlip(op) => op,
            TensorOperation::Resize(op) => op,
            TensorOperation::UniformAugment(op) => op,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name()
    }

    pub fn config_string(&self) -> String {
        self.descriptor().config_string()
    }

    // Logs one error line naming the first rule that fails
    pub fn validate(&self) -> bool {
        match self.descriptor().check() {
            Ok(()) => true,
            Err(err) => {
                error!("{}: {}", self.name(), err);
                false
            }
        }
    }

    // Requires a prior successful `validate()`
    pub fn build(&self) -> Arc<dyn TensorKernel> {
        self.build_with(&KernelConfig::default())
    }

    pub fn build_with(&self, config: &KernelConfig) -> Arc<dyn TensorKernel> {
        debug!("Building {} kernel", self);
        self.descriptor().build_kernel(config)
    }
}

impl fmt::Display for TensorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.config_string())
    }
}
