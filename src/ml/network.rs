// ============================================================
// Layer 5 — Gated Conv + BiLSTM Classifier
// ============================================================
// Forward pass for input [B, C, L] (default dimensions):
//
//   BatchNorm(C)                       [B, C, L]
//   ├─ GatedCnn(k=2)                   [B, 128, L-1]
//   └─ GatedCnn(k=3)                   [B, 128, L-2]
//   cat along length                   [B, 128, 2L-3]
//   BiLstm(2L-3 → 100 per direction)   [B, 128, 200]
//   AdaptiveMaxPool1d(100)             [B, 128, 100]
//   max over the 128 steps             [B, 100]
//   Linear → ReLU → Dropout → Linear → Sigmoid
//                                      [B, 1]
//
// The recurrent layer runs over the 128 gate channels as time
// steps, with the joined gate lengths as features. That fixes L at
// construction time: the LSTM input width depends on it.
//
// Dropout and batch statistics follow Burn's convention: active
// on autodiff backends, identity / running stats otherwise.

use burn::{
    nn::{BatchNorm, BatchNormConfig, BiLstm, BiLstmConfig},
    prelude::*,
};

use crate::domain::topology::Topology;
use crate::error::{self, ModelError};
use crate::ml::{
    gated::{GatedCnn, GatedCnnConfig},
    head::{ClassifierHead, ClassifierHeadConfig},
    pool::adaptive_max_pool1d,
};

/// Dimensions of the classifier.
///
/// Every field except `input_channels` has a default; with the defaults
/// the recurrent layer sees 197 features per step (99 + 98).
/// Serialisable, so it can be written to disk by the config store
/// and the same architecture rebuilt later.
#[derive(Config, Debug)]
pub struct NetworkConfig {
    pub input_channels:  usize,
    #[config(default = 100)]
    pub sequence_length: usize,
    #[config(default = 128)]
    pub gate_channels:   usize,
    #[config(default = 2)]
    pub short_kernel:    usize,
    #[config(default = 3)]
    pub long_kernel:     usize,
    #[config(default = 1)]
    pub stride:          usize,
    #[config(default = 100)]
    pub lstm_hidden:     usize,
    #[config(default = 100)]
    pub pooled_len:      usize,
    #[config(default = 64)]
    pub head_hidden:     usize,
    #[config(default = 0.5)]
    pub dropout:         f64,
}

impl NetworkConfig {
    /// The framework-free view of these dimensions, used for shape checks.
    pub fn topology(&self) -> Topology {
        Topology {
            input_channels:  self.input_channels,
            sequence_length: self.sequence_length,
            gate_channels:   self.gate_channels,
            short_kernel:    self.short_kernel,
            long_kernel:     self.long_kernel,
            stride:          self.stride,
            lstm_hidden:     self.lstm_hidden,
            pooled_len:      self.pooled_len,
            head_hidden:     self.head_hidden,
        }
    }

    /// Reject zero dimensions, kernels longer than the sequence and a
    /// dropout outside [0, 1).
    pub fn validate(&self) -> error::Result<()> {
        self.topology().validate()?;
        if !(0.0..1.0).contains(&self.dropout) {
            return Err(ModelError::invalid_config(format!(
                "dropout must be in [0, 1), got {}",
                self.dropout
            )));
        }
        Ok(())
    }

    /// Validate, then allocate every layer on `device`.
    ///
    /// Fails instead of building a network whose LSTM width can't be derived.
    pub fn init<B: Backend>(&self, device: &B::Device) -> error::Result<Network<B>> {
        self.validate()?;
        let recurrent_input = self.topology().recurrent_input_size()?;

        let gate = |kernel: usize| {
            GatedCnnConfig::new(self.input_channels, kernel)
                .with_stride(self.stride)
                .with_channels_out(self.gate_channels)
                .init(device)
        };

        let network = Network {
            input_norm: BatchNormConfig::new(self.input_channels).init(device),
            gate_short: gate(self.short_kernel),
            gate_long:  gate(self.long_kernel),
            recurrent:  BiLstmConfig::new(recurrent_input, self.lstm_hidden, true).init(device),
            head:       ClassifierHeadConfig::new(self.pooled_len)
                .with_d_hidden(self.head_hidden)
                .with_dropout(self.dropout)
                .init(device),
            input_channels:  self.input_channels,
            sequence_length: self.sequence_length,
            pooled_len:      self.pooled_len,
        };

        tracing::debug!(
            "Network ready: {} input channels, length {}, recurrent width {}, {} parameters",
            self.input_channels,
            self.sequence_length,
            recurrent_input,
            network.num_params(),
        );
        Ok(network)
    }
}

/// Gated conv + BiLSTM binary classifier.
///
/// Build it with `NetworkConfig::init`. The input length is fixed at
/// construction: the LSTM input width is derived from it.
#[derive(Module, Debug)]
pub struct Network<B: Backend> {
    pub input_norm:      BatchNorm<B>,
    pub gate_short:      GatedCnn<B>,
    pub gate_long:       GatedCnn<B>,
    pub recurrent:       BiLstm<B>,
    pub head:            ClassifierHead<B>,
    pub input_channels:  usize,
    pub sequence_length: usize,
    pub pooled_len:      usize,
}

impl<B: Backend> Network<B> {
    /// input: [batch, input_channels, sequence_length] → [batch, 1] probabilities
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 2> {
        self.classify(self.encode(input))
    }

    /// Same as `forward`, with the input shape and the concatenation
    /// boundary checked up front.
    pub fn try_forward(&self, input: Tensor<B, 3>) -> error::Result<Tensor<B, 2>> {
        Ok(self.classify(self.try_encode(input)?))
    }

    /// Scores every recurrent step instead of the pooled readout:
    /// [batch, input_channels, sequence_length] → [batch, gate_channels, 1]
    pub fn forward_per_step(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        self.head.forward(self.encode(input))
    }

    /// Everything up to the pooling stage: [batch, gate_channels, pooled_len]
    pub fn encode(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        let x     = self.input_norm.forward(input);
        let short = self.gate_short.forward(x.clone());
        let long  = self.gate_long.forward(x);
        self.recur_and_pool(Tensor::cat(vec![short, long], 2))
    }

    /// Checked version of `encode`.
    pub fn try_encode(&self, input: Tensor<B, 3>) -> error::Result<Tensor<B, 3>> {
        self.check_input(&input)?;
        let x      = self.input_norm.forward(input);
        let short  = self.gate_short.try_forward(x.clone())?;
        let long   = self.gate_long.try_forward(x)?;
        let joined = concat_gated(short, long)?;
        tracing::trace!("Gated features joined: {:?}", joined.dims());
        Ok(self.recur_and_pool(joined))
    }

    fn recur_and_pool(&self, joined: Tensor<B, 3>) -> Tensor<B, 3> {
        let (sequence, _state) = self.recurrent.forward(joined, None);
        adaptive_max_pool1d(sequence, self.pooled_len)
    }

    // Max over the step axis, then the head: [B, G, P] → [B, P] → [B, 1]
    fn classify(&self, pooled: Tensor<B, 3>) -> Tensor<B, 2> {
        let [batch, _, width] = pooled.dims();
        let readout = pooled.max_dim(1).reshape([batch, width]);
        self.head.forward(readout)
    }

    fn check_input(&self, input: &Tensor<B, 3>) -> error::Result<()> {
        let [batch, channels, length] = input.dims();
        if batch == 0 || channels != self.input_channels || length != self.sequence_length {
            return Err(ModelError::ShapeMismatch {
                stage:    "input",
                expected: vec![batch.max(1), self.input_channels, self.sequence_length],
                actual:   vec![batch, channels, length],
            });
        }
        Ok(())
    }
}

/// Join two gate outputs along the length axis.
/// Batch and channel dimensions must agree.
pub fn concat_gated<B: Backend>(a: Tensor<B, 3>, b: Tensor<B, 3>) -> error::Result<Tensor<B, 3>> {
    let [a_batch, a_channels, a_len] = a.dims();
    let [b_batch, b_channels, b_len] = b.dims();
    if a_batch != b_batch || a_channels != b_channels {
        return Err(ModelError::ShapeMismatch {
            stage:    "concat",
            expected: vec![a_batch, a_channels, b_len],
            actual:   vec![b_batch, b_channels, b_len],
        });
    }
    tracing::trace!("Concatenating gate outputs of length {} and {}", a_len, b_len);
    Ok(Tensor::cat(vec![a, b], 2))
}
