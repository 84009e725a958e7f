use crate::TensorHandle;

#[derive(Debug, thiserror::Error)]
pub enum InvariantError {
    #[error("{arg} must be resident in device memory.")]
    NotDeviceResident { arg: &'static str },
    #[error("{arg} must be contiguous.")]
    NotContiguous { arg: &'static str },
}

/// # Enforcer
///
/// Enforcer enforces the binding-boundary invariants on tensor handles.
///
/// These are the only checks performed at this layer. Shape, dtype and
/// dimension validation belong to the kernel.
pub struct Enforcer;

impl Enforcer {
    pub fn assert_device_resident<T: TensorHandle>(
        tensor: &T,
        arg: &'static str,
    ) -> Result<(), InvariantError> {
        if !tensor.is_device_resident() {
            return Err(InvariantError::NotDeviceResident { arg });
        }
        Ok(())
    }

    pub fn assert_contiguous<T: TensorHandle>(
        tensor: &T,
        arg: &'static str,
    ) -> Result<(), InvariantError> {
        if !tensor.is_contiguous() {
            return Err(InvariantError::NotContiguous { arg });
        }
        Ok(())
    }

    /// Composed precondition check, run before any kernel dispatch.
    pub fn check_input<T: TensorHandle>(
        tensor: &T,
        arg: &'static str,
    ) -> Result<(), InvariantError> {
        Self::assert_device_resident(tensor, arg)?;
        Self::assert_contiguous(tensor, arg)
    }
}
