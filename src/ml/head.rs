// ============================================================
// Layer 5 — Classifier Head
// ============================================================
// Linear → ReLU → Dropout → Linear → Sigmoid
//
// Works on any rank: only the last axis is projected, so the same
// head scores a [batch, features] readout or every step of a
// [batch, steps, features] sequence.

use burn::{
    nn::{Dropout, DropoutConfig, Linear, LinearConfig},
    prelude::*,
    tensor::activation::{relu, sigmoid},
};

/// Width of the head's input, hidden layer and dropout probability.
#[derive(Config, Debug)]
pub struct ClassifierHeadConfig {
    pub d_input:  usize,
    #[config(default = 64)]
    pub d_hidden: usize,
    #[config(default = 0.5)]
    pub dropout:  f64,
}

impl ClassifierHeadConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ClassifierHead<B> {
        ClassifierHead {
            hidden:  LinearConfig::new(self.d_input, self.d_hidden).init(device),
            output:  LinearConfig::new(self.d_hidden, 1).init(device),
            dropout: DropoutConfig::new(self.dropout).init(),
        }
    }
}

/// Two-layer feed-forward scorer ending in a sigmoid.
#[derive(Module, Debug)]
pub struct ClassifierHead<B: Backend> {
    pub hidden:  Linear<B>,
    pub output:  Linear<B>,
    pub dropout: Dropout,
}

impl<B: Backend> ClassifierHead<B> {
    /// [..., d_input] → [..., 1], values in [0, 1]
    pub fn forward<const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        let x = relu(self.hidden.forward(x));
        let x = self.dropout.forward(x);
        sigmoid(self.output.forward(x))
    }
}
