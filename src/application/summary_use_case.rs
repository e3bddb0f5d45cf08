// ============================================================
// Layer 2 — SummaryUseCase
// ============================================================
// Builds the network from a config and reports:
//
//   Step 1: Validate the config and compute the shape plan  (Layer 3)
//   Step 2: Allocate the network on the given device        (Layer 5)
//   Step 3: Count parameters per component                  (Layer 5)
//   Step 4: Run one zero batch and check the output shape
//           against the plan                                (Layer 5)

use anyhow::{bail, Result};
use burn::prelude::*;

use crate::domain::topology::StageShape;
use crate::ml::network::NetworkConfig;

/// Parameter count for one named component of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentParams {
    pub name:   &'static str,
    pub params: usize,
}

/// Everything the `summary` command prints.
#[derive(Debug, Clone)]
pub struct ModelSummary {
    pub components:   Vec<ComponentParams>,
    pub total_params: usize,
    pub stages:       Vec<StageShape>,
}

/// Owns the config and builds one summary from it.
pub struct SummaryUseCase {
    config: NetworkConfig,
    batch:  usize,
}

impl SummaryUseCase {
    pub fn new(config: NetworkConfig, batch: usize) -> Self {
        Self { config, batch }
    }

    pub fn execute<B: Backend>(&self, device: &B::Device) -> Result<ModelSummary> {
        // ── Step 1: Shape plan ───────────────────────────────────────────────
        let stages = self.config.topology().trace(self.batch)?;

        // ── Step 2: Build the network ────────────────────────────────────────
        let network = self.config.init::<B>(device)?;

        // ── Step 3: Parameter counts ─────────────────────────────────────────
        let components = vec![
            ComponentParams { name: "input_norm", params: network.input_norm.num_params() },
            ComponentParams { name: "gate_short", params: network.gate_short.num_params() },
            ComponentParams { name: "gate_long",  params: network.gate_long.num_params() },
            ComponentParams { name: "recurrent",  params: network.recurrent.num_params() },
            ComponentParams { name: "head",       params: network.head.num_params() },
        ];
        let total_params = network.num_params();
        tracing::info!("Network has {} parameters", total_params);

        // ── Step 4: Check the plan against a real forward pass ───────────────
        let [c, l] = [self.config.input_channels, self.config.sequence_length];
        let output = network.try_forward(Tensor::zeros([self.batch, c, l], device))?;
        let planned = stages.last().map(|s| s.dims.clone()).unwrap_or_default();
        if output.dims().to_vec() != planned {
            bail!("Output shape {:?} differs from planned {:?}", output.dims(), planned);
        }

        Ok(ModelSummary { components, total_params, stages })
    }
}
