// ============================================================
// Layer 3 — Network Topology
// ============================================================
// The integer dimensions of the classifier and the shape-flow
// arithmetic between its stages. No tensors here, so the whole
// shape plan can be validated and printed before any weights
// are allocated.
//
// Shape flow for input [B, C, L]:
//
//   input        [B, C, L]
//   batch_norm   [B, C, L]
//   gate_short   [B, G, L1]        L1 = conv_len(L, short_kernel)
//   gate_long    [B, G, L2]        L2 = conv_len(L, long_kernel)
//   concat       [B, G, L1 + L2]   (L = 100 → 99 + 98 = 197)
//   recurrent    [B, G, 2H]        G steps of L1 + L2 features
//   pool         [B, G, P]
//   readout      [B, P]            max over the G steps
//   head         [B, 1]

use crate::error::{ModelError, Result};

/// Output length of a 1-D convolution without padding or dilation.
/// Returns None when the kernel doesn't fit in the input.
pub fn conv_output_len(length: usize, kernel: usize, stride: usize) -> Option<usize> {
    if kernel == 0 || stride == 0 || length < kernel {
        return None;
    }
    Some((length - kernel) / stride + 1)
}

/// One row of the shape plan: a stage name and its output dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageShape {
    pub stage: &'static str,
    pub dims:  Vec<usize>,
}

impl StageShape {
    fn new(stage: &'static str, dims: Vec<usize>) -> Self {
        Self { stage, dims }
    }
}

/// Integer dimensions of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub input_channels:  usize,
    pub sequence_length: usize,
    pub gate_channels:   usize,
    pub short_kernel:    usize,
    pub long_kernel:     usize,
    pub stride:          usize,
    pub lstm_hidden:     usize,
    pub pooled_len:      usize,
    pub head_hidden:     usize,
}

impl Topology {
    /// Check every dimension is positive and both kernels fit the sequence.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("input_channels", self.input_channels),
            ("sequence_length", self.sequence_length),
            ("gate_channels", self.gate_channels),
            ("short_kernel", self.short_kernel),
            ("long_kernel", self.long_kernel),
            ("stride", self.stride),
            ("lstm_hidden", self.lstm_hidden),
            ("pooled_len", self.pooled_len),
            ("head_hidden", self.head_hidden),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v == 0) {
            return Err(ModelError::invalid_config(format!("{name} must be greater than zero")));
        }

        let widest = self.short_kernel.max(self.long_kernel);
        if self.sequence_length < widest {
            return Err(ModelError::invalid_config(format!(
                "sequence_length {} is shorter than kernel size {}",
                self.sequence_length, widest
            )));
        }
        Ok(())
    }

    /// Length of the short-kernel gate output.
    pub fn short_gate_len(&self) -> Result<usize> {
        self.gate_len(self.short_kernel)
    }

    /// Length of the long-kernel gate output.
    pub fn long_gate_len(&self) -> Result<usize> {
        self.gate_len(self.long_kernel)
    }

    /// Feature width seen by the recurrent layer: both gate lengths joined.
    pub fn recurrent_input_size(&self) -> Result<usize> {
        Ok(self.short_gate_len()? + self.long_gate_len()?)
    }

    /// Output shape of every stage for a batch of `batch` examples.
    pub fn trace(&self, batch: usize) -> Result<Vec<StageShape>> {
        self.validate()?;
        let (c, l, g) = (self.input_channels, self.sequence_length, self.gate_channels);
        let l1 = self.short_gate_len()?;
        let l2 = self.long_gate_len()?;

        Ok(vec![
            StageShape::new("input", vec![batch, c, l]),
            StageShape::new("batch_norm", vec![batch, c, l]),
            StageShape::new("gate_short", vec![batch, g, l1]),
            StageShape::new("gate_long", vec![batch, g, l2]),
            StageShape::new("concat", vec![batch, g, l1 + l2]),
            StageShape::new("recurrent", vec![batch, g, 2 * self.lstm_hidden]),
            StageShape::new("pool", vec![batch, g, self.pooled_len]),
            StageShape::new("readout", vec![batch, self.pooled_len]),
            StageShape::new("head", vec![batch, 1]),
        ])
    }

    fn gate_len(&self, kernel: usize) -> Result<usize> {
        conv_output_len(self.sequence_length, kernel, self.stride).ok_or_else(|| {
            ModelError::invalid_config(format!(
                "kernel size {kernel} does not fit sequence_length {}",
                self.sequence_length
            ))
        })
    }
}
