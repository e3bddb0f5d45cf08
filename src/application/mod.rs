// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one CLI command each.
//
// Rules for this layer:
//   - No model code here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// Build a network and report its parameters and shape plan
pub mod summary_use_case;

// One forward pass on seeded random input
pub mod probe_use_case;
