//! Host configuration root.

use std::path::{Path, PathBuf};

use crate::config::FetchConfig;

/// The parts of the host platform a service call can see: where its
/// configuration directory lives and how to reach the network.
#[derive(Debug, Clone)]
pub struct HostConfig {
    config_dir: PathBuf,
    fetch: FetchConfig,
}

impl HostConfig {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            fetch: FetchConfig::default(),
        }
    }

    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn fetch(&self) -> &FetchConfig {
        &self.fetch
    }

    /// Resolves `rel` (a sandbox-normalized relative path) under the configuration root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.config_dir.join(rel)
    }
}
