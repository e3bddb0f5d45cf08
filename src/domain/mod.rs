// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust description of the network: its dimensions and the
// shape every stage produces.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only integers, structs and shape arithmetic

/// Network dimensions and stage-by-stage shape plan
pub mod topology;
