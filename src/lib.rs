//! Gated convolutional + bidirectional LSTM binary classifier on Burn.
//!
//! The input `[batch, channels, length]` is batch-normalised, passed
//! through two gated convolutions with different kernel sizes, joined
//! along the length axis, run through a bidirectional LSTM, max-pooled
//! to a fixed width and scored by a small feed-forward head.
//!
//! ```ignore
//! use burn::backend::NdArray;
//! use gated_conv_classifier::NetworkConfig;
//!
//! let device  = Default::default();
//! let network = NetworkConfig::new(16).init::<NdArray>(&device)?;
//! let probs   = network.forward(input); // [batch, 1]
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ml;

pub use domain::topology::{StageShape, Topology};
pub use error::{ModelError, Result};
pub use ml::{
    gated::{GatedCnn, GatedCnnConfig},
    head::{ClassifierHead, ClassifierHeadConfig},
    network::{concat_gated, Network, NetworkConfig},
    pool::adaptive_max_pool1d,
};
