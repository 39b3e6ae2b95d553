//! CLI command implementations.

use std::path::{Path, PathBuf};

use gridnav::config::NavigatorConfig;
use gridnav::{Error, Topology};
use tracing::debug;

mod display;

pub mod impact;
pub mod layout;
pub mod list;
pub mod rank;
pub mod show;
pub mod types;
pub mod validate;

/// Loaded configuration plus the topology every command queries.
pub struct Navigator {
    pub config: NavigatorConfig,
    pub topology: Topology,
}

impl Navigator {
    /// Resolve configuration and build the topology.
    ///
    /// An explicit `--config` must exist; otherwise `gridnav.yaml` in the
    /// working directory is used when present. `--network` wins over the
    /// configured network.
    pub fn open(config_path: Option<&Path>, network: Option<PathBuf>) -> Result<Self, Error> {
        let mut config = match config_path {
            Some(path) => NavigatorConfig::load(path)?,
            None => NavigatorConfig::discover(&std::env::current_dir()?)?,
        };

        if network.is_some() {
            config.network = network;
        }

        let topology = config.equipment_table()?.into_topology()?;
        debug!(
            nodes = topology.len(),
            edges = topology.edge_count(),
            "Navigator ready"
        );

        Ok(Self { config, topology })
    }

    #[cfg(test)]
    pub fn demo() -> Self {
        Self {
            config: NavigatorConfig::default(),
            topology: gridnav::sample::demo_table()
                .into_topology()
                .expect("demo network is valid"),
        }
    }
}
