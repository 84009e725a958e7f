use std::sync::Arc;

use crate::{InvariantError, TensorHandle};

#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error(transparent)]
    InvariantError(#[from] InvariantError),
    #[error("No operation named {0:?} is registered.")]
    UnknownOperation(String),
    #[error(transparent)]
    KernelError(#[from] anyhow::Error),
}

/// # BilinearKernel
///
/// The seam behind which the device kernels live.
///
/// Implementors wrap the externally-implemented CUDA entry points; the
/// production implementation wraps `ffi::bilinear_cuda_forward` and
/// `ffi::bilinear_cuda_backward` (behind the `cuda` feature). The dispatcher
/// hands implementors a validated tensor and returns whatever they produce,
/// so any error they raise reaches the caller unmodified.
pub trait BilinearKernel {
    type Tensor: TensorHandle;

    /// Resample `input` to a `new_h` x `new_w` spatial resolution.
    fn forward(
        &self,
        input: &Self::Tensor,
        new_h: usize,
        new_w: usize,
    ) -> anyhow::Result<Self::Tensor>;

    /// Gradient of [`BilinearKernel::forward`] with respect to its input,
    /// sized to the original `orig_h` x `orig_w` resolution.
    fn backward(
        &self,
        grad_output: &Self::Tensor,
        orig_h: usize,
        orig_w: usize,
    ) -> anyhow::Result<Self::Tensor>;
}

impl<K: BilinearKernel> BilinearKernel for Arc<K> {
    type Tensor = K::Tensor;

    fn forward(
        &self,
        input: &Self::Tensor,
        new_h: usize,
        new_w: usize,
    ) -> anyhow::Result<Self::Tensor> {
        (**self).forward(input, new_h, new_w)
    }

    fn backward(
        &self,
        grad_output: &Self::Tensor,
        orig_h: usize,
        orig_w: usize,
    ) -> anyhow::Result<Self::Tensor> {
        (**self).backward(grad_output, orig_h, orig_w)
    }
}
