mod enforcer;
mod module;
mod op;
mod ops;
mod tensor;

#[cfg(feature = "cuda")]
pub mod ffi;

pub use enforcer::*;
pub use module::*;
pub use op::*;
pub use ops::*;
pub use tensor::*;

pub mod prelude {
    pub use crate::{register_bilinear, Bilinear, BilinearKernel, Module, TensorHandle};
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{BilinearKernel, TensorHandle};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct StubTensor {
        pub shape: Vec<usize>,
        pub device_resident: bool,
        pub contiguous: bool,
    }

    impl StubTensor {
        pub fn device(shape: &[usize]) -> Self {
            Self {
                shape: shape.to_vec(),
                device_resident: true,
                contiguous: true,
            }
        }

        pub fn host(shape: &[usize]) -> Self {
            Self {
                device_resident: false,
                ..Self::device(shape)
            }
        }

        pub fn strided(shape: &[usize]) -> Self {
            Self {
                contiguous: false,
                ..Self::device(shape)
            }
        }
    }

    impl TensorHandle for StubTensor {
        fn is_device_resident(&self) -> bool {
            self.device_resident
        }

        fn is_contiguous(&self) -> bool {
            self.contiguous
        }
    }

    /// Mock kernel: counts invocations and shapes its output from the size
    /// arguments, so tests can observe exactly what was dispatched.
    #[derive(Debug, Default)]
    pub struct CountingKernel {
        pub forward_calls: AtomicUsize,
        pub backward_calls: AtomicUsize,
    }

    fn resized(input: &StubTensor, h: usize, w: usize) -> StubTensor {
        let mut shape = input.shape.clone();
        let rank = shape.len();
        shape[rank - 2] = h;
        shape[rank - 1] = w;
        StubTensor::device(&shape)
    }

    impl BilinearKernel for CountingKernel {
        type Tensor = StubTensor;

        fn forward(
            &self,
            input: &StubTensor,
            new_h: usize,
            new_w: usize,
        ) -> anyhow::Result<StubTensor> {
            self.forward_calls.fetch_add(1, Ordering::SeqCst);
            Ok(resized(input, new_h, new_w))
        }

        fn backward(
            &self,
            grad_output: &StubTensor,
            orig_h: usize,
            orig_w: usize,
        ) -> anyhow::Result<StubTensor> {
            self.backward_calls.fetch_add(1, Ordering::SeqCst);
            Ok(resized(grad_output, orig_h, orig_w))
        }
    }

    /// Kernel whose entry points always fail, for error passthrough tests.
    #[derive(Debug)]
    pub struct FailingKernel;

    impl BilinearKernel for FailingKernel {
        type Tensor = StubTensor;

        fn forward(&self, _: &StubTensor, _: usize, _: usize) -> anyhow::Result<StubTensor> {
            anyhow::bail!("CUDA error: out of memory")
        }

        fn backward(&self, _: &StubTensor, _: usize, _: usize) -> anyhow::Result<StubTensor> {
            anyhow::bail!("CUDA error: out of memory")
        }
    }
}
