// ============================================================
// Layer 5 — Gated Convolution
// ============================================================
// Two parallel 1-D convolutions over the same input. One passes
// through a sigmoid and acts as a gate on the other:
//
//   out = sigmoid(conv_gate(x)) * conv_value(x)
//
// Both convolutions share kernel size and stride but have their
// own weights. No padding, so the length shrinks by kernel - 1
// (for stride 1).
//
//   input  [batch, channels_in, length]
//   output [batch, channels_out, (length - kernel) / stride + 1]

use burn::{
    nn::conv::{Conv1d, Conv1dConfig},
    prelude::*,
    tensor::activation::sigmoid,
};

use crate::domain::topology::conv_output_len;
use crate::error::{self, ModelError};

/// Hyperparameters of one gated convolution block.
///
/// Only the input channel count and kernel size are required;
/// the output width defaults to 128 channels with stride 1.
#[derive(Config, Debug)]
pub struct GatedCnnConfig {
    pub channels_in: usize,
    pub kernel_size: usize,
    #[config(default = 1)]
    pub stride: usize,
    #[config(default = 128)]
    pub channels_out: usize,
}

impl GatedCnnConfig {
    /// Build the block with two independently initialised convolutions.
    pub fn init<B: Backend>(&self, device: &B::Device) -> GatedCnn<B> {
        let conv = || {
            Conv1dConfig::new(self.channels_in, self.channels_out, self.kernel_size)
                .with_stride(self.stride)
                .init(device)
        };
        GatedCnn {
            conv_gate:   conv(),
            conv_value:  conv(),
            channels_in: self.channels_in,
            kernel_size: self.kernel_size,
            stride:      self.stride,
        }
    }

    /// Output length for an input of `length` steps, None if the kernel doesn't fit.
    pub fn output_len(&self, length: usize) -> Option<usize> {
        conv_output_len(length, self.kernel_size, self.stride)
    }
}

/// Gated 1-D convolution: a sigmoid gate multiplied into a linear projection.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu).
#[derive(Module, Debug)]
pub struct GatedCnn<B: Backend> {
    /// Passed through a sigmoid, scales `conv_value` element-wise
    pub conv_gate:   Conv1d<B>,
    /// The projection being gated
    pub conv_value:  Conv1d<B>,
    pub channels_in: usize,
    pub kernel_size: usize,
    pub stride:      usize,
}

impl<B: Backend> GatedCnn<B> {
    /// input: [batch, channels_in, length] → [batch, channels_out, conv_len]
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        let gate  = sigmoid(self.conv_gate.forward(input.clone()));
        let value = self.conv_value.forward(input);
        gate * value
    }

    /// Same as `forward`, but reports an empty batch, a wrong channel count
    /// or a sequence shorter than the kernel instead of panicking inside
    /// the backend.
    pub fn try_forward(&self, input: Tensor<B, 3>) -> error::Result<Tensor<B, 3>> {
        let [batch, channels, length] = input.dims();
        if batch == 0 {
            return Err(ModelError::ShapeMismatch {
                stage:    "gated_conv",
                expected: vec![1, self.channels_in, length],
                actual:   vec![batch, channels, length],
            });
        }
        if channels != self.channels_in {
            return Err(ModelError::ShapeMismatch {
                stage:    "gated_conv",
                expected: vec![batch, self.channels_in, length],
                actual:   vec![batch, channels, length],
            });
        }
        if conv_output_len(length, self.kernel_size, self.stride).is_none() {
            return Err(ModelError::ShapeMismatch {
                stage:    "gated_conv",
                expected: vec![batch, channels, self.kernel_size],
                actual:   vec![batch, channels, length],
            });
        }
        Ok(self.forward(input))
    }
}
