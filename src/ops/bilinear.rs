use derive_new::new;

use crate::{BilinearKernel, Enforcer, OperationError};

/// # Bilinear
///
/// Dispatcher for the bilinear resize kernels.
///
/// Each entry point validates its tensor argument and delegates; the
/// dispatcher holds no state between calls, so concurrent invocations on
/// independent tensors cannot interfere.
#[derive(new, Debug, Clone)]
pub struct Bilinear<K: BilinearKernel> {
    kernel: K,
}

impl<K: BilinearKernel> Bilinear<K> {
    /// Resample `input` to `new_h` x `new_w`, returning the kernel's result
    /// with no post-processing.
    pub fn forward(
        &self,
        input: &K::Tensor,
        new_h: usize,
        new_w: usize,
    ) -> Result<K::Tensor, OperationError> {
        Enforcer::check_input(input, "input")?;
        log::debug!("bilinear_forward -> {}x{}", new_h, new_w);
        Ok(self.kernel.forward(input, new_h, new_w)?)
    }

    /// Gradient with respect to the original `orig_h` x `orig_w` input.
    pub fn backward(
        &self,
        grad_output: &K::Tensor,
        orig_h: usize,
        orig_w: usize,
    ) -> Result<K::Tensor, OperationError> {
        Enforcer::check_input(grad_output, "grad_output")?;
        log::debug!("bilinear_backward -> {}x{}", orig_h, orig_w);
        Ok(self.kernel.backward(grad_output, orig_h, orig_w)?)
    }
}
