/// # TensorHandle
///
/// Opaque view of the host runtime's tensor type.
///
/// The buffer behind a handle is owned and lifetime-managed entirely by the
/// host runtime; this crate never allocates, copies, or frees it. The binding
/// boundary only needs to ask two questions before dispatching: where does
/// the buffer live, and is it laid out contiguously.
pub trait TensorHandle {
    /// True if the underlying buffer resides in device (accelerator) memory.
    fn is_device_resident(&self) -> bool;

    /// True if the buffer is contiguous in its element ordering.
    fn is_contiguous(&self) -> bool;
}
