// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores a NetworkConfig as pretty JSON so the same
// architecture can be rebuilt from disk.
//
// Example file:
//   {
//     "input_channels": 16,
//     "sequence_length": 100,
//     "gate_channels": 128,
//     ...
//   }
//
// Loading validates the config, so a bad file is reported here
// rather than as a panic inside the first forward pass.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::ml::network::NetworkConfig;

/// Reads and writes one NetworkConfig JSON file.
pub struct ConfigStore {
    /// Location of the JSON file
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given file. Nothing touches the disk
    /// until `save` or `load` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Write the config as pretty JSON, creating parent directories
    /// like `mkdir -p`.
    pub fn save(&self, cfg: &NetworkConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create directory '{}'", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved network config to '{}'", self.path.display());
        Ok(())
    }

    /// Read, parse and validate the config.
    pub fn load(&self) -> Result<NetworkConfig> {
        let json = fs::read_to_string(&self.path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Run 'init-config' to create one.",
                self.path.display()
            )
        })?;

        let cfg: NetworkConfig = serde_json::from_str(&json)
            .with_context(|| format!("Malformed config in '{}'", self.path.display()))?;
        cfg.validate()
            .with_context(|| format!("Rejected config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded network config from '{}'", self.path.display());
        Ok(cfg)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_keeps_dimensions() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("network.json"));

        let cfg = NetworkConfig::new(12).with_sequence_length(40).with_dropout(0.25);
        store.save(&cfg).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.input_channels, 12);
        assert_eq!(loaded.sequence_length, 40);
        assert_eq!(loaded.gate_channels, 128);
        assert_eq!(loaded.dropout, 0.25);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("absent.json"));

        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("network.json"));

        store.save(&NetworkConfig::new(4).with_sequence_length(1)).unwrap();
        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("shorter than kernel size"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(ConfigStore::new(path).load().is_err());
    }
}
