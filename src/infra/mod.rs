// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to the model itself:
//
//   config_store.rs — NetworkConfig as JSON on disk, validated
//                     on load so the model can be rebuilt
//
//   backend.rs      — the concrete Burn backend and device the
//                     CLI runs on (ndarray, or wgpu by feature)
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §3 (Backends)

/// NetworkConfig persistence
pub mod config_store;

/// Backend and device used by the CLI
pub mod backend;
