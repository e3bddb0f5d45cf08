// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands: `init-config`, `summary`, `probe`.

use clap::{Args, Subcommand};

use crate::ml::network::NetworkConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a network config file with the given dimensions
    InitConfig(InitConfigArgs),

    /// Build the network and print parameter counts and stage shapes
    Summary(SummaryArgs),

    /// Run one forward pass on seeded random input
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the JSON config
    #[arg(long, default_value = "network.json")]
    pub out: String,

    /// Number of channels in the input sequence
    #[arg(long)]
    pub input_channels: usize,

    /// Input length; fixes the recurrent input width (2L - 3 by default)
    #[arg(long, default_value_t = 100)]
    pub sequence_length: usize,

    /// Output channels of each gated convolution
    #[arg(long, default_value_t = 128)]
    pub gate_channels: usize,

    /// Hidden size of each LSTM direction
    #[arg(long, default_value_t = 100)]
    pub lstm_hidden: usize,

    /// Length the recurrent output is pooled down to
    #[arg(long, default_value_t = 100)]
    pub pooled_len: usize,

    /// Hidden width of the classifier head
    #[arg(long, default_value_t = 64)]
    pub head_hidden: usize,

    /// Dropout probability in the classifier head (training only)
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,
}

impl From<&InitConfigArgs> for NetworkConfig {
    fn from(a: &InitConfigArgs) -> Self {
        NetworkConfig::new(a.input_channels)
            .with_sequence_length(a.sequence_length)
            .with_gate_channels(a.gate_channels)
            .with_lstm_hidden(a.lstm_hidden)
            .with_pooled_len(a.pooled_len)
            .with_head_hidden(a.head_hidden)
            .with_dropout(a.dropout)
    }
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Network config written by `init-config`
    #[arg(long, default_value = "network.json")]
    pub config: String,

    /// Batch size used for the shape table
    #[arg(long, default_value_t = 1)]
    pub batch: usize,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Network config written by `init-config`
    #[arg(long, default_value = "network.json")]
    pub config: String,

    /// Number of random examples
    #[arg(long, default_value_t = 4)]
    pub batch: usize,

    /// Seed for the random input
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
