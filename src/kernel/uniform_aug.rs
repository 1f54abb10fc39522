use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::index;

use crate::config::KernelConfig;
use crate::error::{Result, TransformError};
use crate::tensor::Tensor;

use super::{KernelArgs, TensorKernel};

// Applies `num_ops` distinct kernels, picked uniformly from `transforms`,
// one after another in the order they were drawn.
#[derive(Debug)]
pub struct UniformAugKernel {
    pub transforms: Vec<Arc<dyn TensorKernel>>,
    pub num_ops: i32,
    rng: Mutex<StdRng>,
}

impl UniformAugKernel {
    pub fn new(transforms: Vec<Arc<dyn TensorKernel>>, num_ops: i32, config: &KernelConfig) -> Self {
        Self {
            transforms,
            num_ops,
            rng: config.rng(),
        }
    }

    // Never more than the number of transforms; non-positive means none
    fn ops_to_apply(&self) -> usize {
        usize::try_from(self.num_ops).unwrap_or(0).min(self.transforms.len())
    }
}

impl TensorKernel for UniformAugKernel {
    fn name(&self) -> &'static str {
        "UniformAugment"
    }

    fn args(&self) -> KernelArgs {
        KernelArgs::UniformAugment {
            transforms: self.transforms.iter().map(|kernel| kernel.args()).collect(),
            num_ops: self.num_ops,
        }
    }

    fn apply(&self, input: &Tensor) -> Result<Tensor> {
        let chosen = {
            let mut rng = self.rng.lock().map_err(|_| TransformError::RngLockError)?;
            index::sample(&mut *rng, self.transforms.len(), self.ops_to_apply())
        };

        let mut output = input.clone();
        for i in chosen.iter() {
            output = self.transforms[i].apply(&output)?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{CutOutKernel, RandomFlipKernel};

    fn children() -> Vec<Arc<dyn TensorKernel>> {
        let config = KernelConfig::default();
        vec![
            Arc::new(RandomFlipKernel::horizontal(1.0, &config)) as Arc<dyn TensorKernel>,
            Arc::new(CutOutKernel::new(1, 1, 1, false, 0, 0, 0, &config)) as Arc<dyn TensorKernel>,
        ]
    }

    fn grid() -> Tensor {
        Tensor::from_u8(vec![1, 3], vec![1, 2, 3]).unwrap()
    }

    #[test]
    fn args_keep_child_order() {
        let kernel = UniformAugKernel::new(children(), 1, &KernelConfig::default());
        match kernel.args() {
            KernelArgs::UniformAugment { transforms, num_ops } => {
                assert_eq!(num_ops, 1);
                assert_eq!(transforms.len(), 2);
                assert_eq!(transforms[0], KernelArgs::RandomHorizontalFlip { prob: 1.0 });
                assert!(matches!(transforms[1], KernelArgs::CutOut { .. }));
            }
            other => panic!("unexpected args {:?}", other),
        }
    }

    #[test]
    fn non_positive_num_ops_is_identity() {
        for num_ops in [0, -3] {
            let kernel = UniformAugKernel::new(children(), num_ops, &KernelConfig::default());
            assert_eq!(kernel.apply(&grid()).unwrap(), grid());
        }
    }

    #[test]
    fn num_ops_is_capped_at_the_transform_count() {
        let kernel = UniformAugKernel::new(children(), 10, &KernelConfig::seeded(5));
        assert_eq!(kernel.ops_to_apply(), 2);
        let out = kernel.apply(&grid()).unwrap();
        // the flip always fires and cutout zeroes exactly one pixel
        assert_eq!(out.as_u8().unwrap().iter().filter(|&&v| v == 0).count(), 1);
    }

    #[test]
    fn batches_preserve_order() {
        let kernel = UniformAugKernel::new(children(), 0, &KernelConfig::default());
        let batch: Vec<Tensor> = (0..8u8)
            .map(|v| Tensor::from_u8(vec![1, 1], vec![v]).unwrap())
            .collect();
        assert_eq!(kernel.apply_batch(&batch).unwrap(), batch);
    }
}
