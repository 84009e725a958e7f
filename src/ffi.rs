//! Raw declarations for the device kernels.
//!
//! The kernels themselves are implemented in the companion CUDA library;
//! linking it is the build system's concern. Layouts are NCHW, buffers are
//! device pointers, and the stream handle is the runtime's `cudaStream_t`.

use std::os::raw::{c_int, c_void};

pub type StreamHandle = *mut c_void;

extern "C" {
    pub fn bilinear_cuda_forward(
        input: *const f32,
        batch: c_int,
        channels: c_int,
        in_h: c_int,
        in_w: c_int,
        output: *mut f32,
        new_h: c_int,
        new_w: c_int,
        stream: StreamHandle,
    );

    pub fn bilinear_cuda_backward(
        grad_output: *const f32,
        batch: c_int,
        channels: c_int,
        grad_h: c_int,
        grad_w: c_int,
        grad_input: *mut f32,
        orig_h: c_int,
        orig_w: c_int,
        stream: StreamHandle,
    );
}
