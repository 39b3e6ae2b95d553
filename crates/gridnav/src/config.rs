//! Configuration for the navigator.
//!
//! Settings come from an optional `gridnav.yaml`:
//!
//! ```yaml
//! network: networks/plant.yaml   # relative to this file
//! edge-policy: induced           # or feed-path (default)
//! max-display: 20                # list truncation in the CLI
//! ```
//!
//! Command-line flags override the file; the file overrides the defaults.
//! With no network configured anywhere the bundled demo network is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::projection::EdgePolicy;
use crate::sample;
use crate::table::EquipmentTable;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gridnav.yaml";

/// Default number of items shown per list before truncating
pub const DEFAULT_MAX_DISPLAY: usize = 10;

/// Navigator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Equipment table file; `None` selects the demo network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<PathBuf>,

    /// Edge policy for layouts
    #[serde(default)]
    pub edge_policy: EdgePolicy,

    /// Items shown per list before "... and N more"
    #[serde(default = "default_max_display")]
    pub max_display: usize,
}

fn default_max_display() -> usize {
    DEFAULT_MAX_DISPLAY
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            network: None,
            edge_policy: EdgePolicy::default(),
            max_display: DEFAULT_MAX_DISPLAY,
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from a file.
    ///
    /// A relative `network` path is resolved against the directory holding
    /// the configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config` if
    /// it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        if config.max_display == 0 {
            return Err(Error::Config(format!(
                "{}: max-display must be at least 1",
                path.display()
            )));
        }

        if let (Some(network), Some(base)) = (config.network.as_ref(), path.parent()) {
            if network.is_relative() {
                config.network = Some(base.join(network));
            }
        }

        debug!(path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }

    /// Load `gridnav.yaml` from `dir` if it exists, else return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// The equipment table this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured network file cannot be loaded.
    pub fn equipment_table(&self) -> Result<EquipmentTable> {
        match &self.network {
            Some(path) => EquipmentTable::load(path),
            None => {
                info!("No network configured, using the demo network");
                Ok(sample::demo_table())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{}\n").unwrap();

        assert_eq!(NavigatorConfig::load(&path).unwrap(), NavigatorConfig::default());
    }

    #[test]
    fn relative_network_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "network: nets/plant.yaml\nedge-policy: induced\nmax-display: 3\n",
        )
        .unwrap();

        let config = NavigatorConfig::load(&path).unwrap();
        assert_eq!(config.network, Some(dir.path().join("nets/plant.yaml")));
        assert_eq!(config.edge_policy, EdgePolicy::Induced);
        assert_eq!(config.max_display, 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "netwrok: typo.yaml\n").unwrap();

        assert!(matches!(NavigatorConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn zero_max_display_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "max-display: 0\n").unwrap();

        assert!(matches!(NavigatorConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = NavigatorConfig::discover(dir.path()).unwrap();
        assert_eq!(config, NavigatorConfig::default());
        assert_eq!(config.equipment_table().unwrap(), sample::demo_table());
    }
}
