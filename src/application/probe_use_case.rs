// ============================================================
// Layer 2 — ProbeUseCase
// ============================================================
// Runs one forward pass on seeded random input. The network
// weights are freshly initialised, so the probabilities mean
// nothing by themselves; the point is to exercise the full
// forward path for a given config and see its output range.

use anyhow::Result;
use burn::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::ml::network::NetworkConfig;

/// Owns the config, batch size and seed for one probe run.
pub struct ProbeUseCase {
    config: NetworkConfig,
    batch:  usize,
    seed:   u64,
}

impl ProbeUseCase {
    pub fn new(config: NetworkConfig, batch: usize, seed: u64) -> Self {
        Self { config, batch, seed }
    }

    /// Uniform values in [-1, 1), shape [batch, input_channels, sequence_length].
    pub fn input<B: Backend>(&self, device: &B::Device) -> Tensor<B, 3> {
        let shape = [self.batch, self.config.input_channels, self.config.sequence_length];
        let mut rng = StdRng::seed_from_u64(self.seed);
        let values: Vec<f32> = (0..shape.iter().product::<usize>())
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect();
        Tensor::from_data(TensorData::new(values, shape), device)
    }

    /// One probability per example.
    pub fn execute<B: Backend>(&self, device: &B::Device) -> Result<Vec<f32>> {
        let network = self.config.init::<B>(device)?;
        let output  = network.try_forward(self.input::<B>(device))?;

        let probs = output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read probabilities: {e:?}"))?;
        tracing::info!("Probed {} examples with seed {}", probs.len(), self.seed);
        Ok(probs)
    }
}
