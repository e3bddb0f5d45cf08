// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn module code lives here. Other layers only see the
// network through NetworkConfig / Network.
//
//   gated.rs   — gated convolution: sigmoid(conv_a(x)) * conv_b(x)
//   pool.rs    — adaptive max pooling over the last axis
//   head.rs    — Linear → ReLU → Dropout → Linear → Sigmoid
//   network.rs — BatchNorm, two gates, BiLSTM, pooling, head
//
// Reference: Burn Book §3 (Building Blocks)
//            Dauphin et al. (2017) Language Modeling with Gated
//            Convolutional Networks

/// Gated 1-D convolution block
pub mod gated;

/// Adaptive max pooling
pub mod pool;

/// Feed-forward classifier head
pub mod head;

/// The full classifier
pub mod network;
