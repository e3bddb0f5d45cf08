// ============================================================
// Layer 6 — Backend Selection
// ============================================================
// The library is generic over any Burn backend. The CLI needs a
// concrete one: ndarray on the CPU by default, wgpu when built
// with `--features wgpu`.
//
// Neither is an autodiff backend, so dropout is disabled and
// batch norm uses its running statistics.

use burn::tensor::backend::Backend;

#[cfg(not(feature = "wgpu"))]
pub type CliBackend = burn::backend::NdArray;

#[cfg(feature = "wgpu")]
pub type CliBackend = burn::backend::Wgpu;

pub type CliDevice = <CliBackend as Backend>::Device;

pub fn default_device() -> CliDevice {
    CliDevice::default()
}

pub fn backend_name() -> &'static str {
    if cfg!(feature = "wgpu") { "wgpu" } else { "ndarray" }
}
