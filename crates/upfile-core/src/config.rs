use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP client parameters for url uploads (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed.
    pub max_redirections: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 300,
            max_redirections: 10,
        }
    }
}

/// Global configuration loaded from `~/.config/upfile/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpfileConfig {
    /// Host configuration root; the sandbox lives in its `www/` directory.
    /// Defaults to `~/.local/share/upfile`.
    #[serde(default)]
    pub config_dir: Option<PathBuf>,
    /// Optional HTTP client settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl UpfileConfig {
    /// Effective host configuration root.
    pub fn host_root(&self) -> Result<PathBuf> {
        match &self.config_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("upfile")?;
                Ok(xdg_dirs.get_data_home())
            }
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("upfile")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UpfileConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UpfileConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UpfileConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fetch_values() {
        let cfg = UpfileConfig::default().fetch_config();
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.timeout_secs, 300);
        assert_eq!(cfg.max_redirections, 10);
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg: UpfileConfig = toml::from_str("").unwrap();
        assert!(cfg.config_dir.is_none());
        assert!(cfg.fetch.is_none());
    }

    #[test]
    fn explicit_config_dir_is_host_root() {
        let toml = r#"
            config_dir = "/srv/homeassistant/config"
        "#;
        let cfg: UpfileConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.host_root().unwrap(),
            PathBuf::from("/srv/homeassistant/config")
        );
    }

    #[test]
    fn config_toml_fetch_section() {
        let toml = r#"
            config_dir = "/config"

            [fetch]
            connect_timeout_secs = 5
            timeout_secs = 60
            max_redirections = 3
        "#;
        let cfg: UpfileConfig = toml::from_str(toml).unwrap();
        let fetch = cfg.fetch_config();
        assert_eq!(fetch.connect_timeout_secs, 5);
        assert_eq!(fetch.timeout_secs, 60);
        assert_eq!(fetch.max_redirections, 3);
    }
}
