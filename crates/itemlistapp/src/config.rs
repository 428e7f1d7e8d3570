//! # Configuration
//!
//! Server configuration is managed by [`confique`], which handles layered loading
//! from environment variables, a TOML file and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: flags applied by the binary after loading.
//! 2. **Environment variables**: `ITEMLIST_HOST`, `ITEMLIST_PORT`, etc.
//! 3. **Config file**: the TOML file passed with `--config`, if any. A missing file
//!    is skipped.
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `host` | `ITEMLIST_HOST` | `127.0.0.1` | Interface to bind |
//! | `port` | `ITEMLIST_PORT` | `8000` | Port to bind |
//! | `data_file` | `ITEMLIST_DATA_FILE` | `data.json` | Backing JSON file |
//! | `static_dir` | `ITEMLIST_STATIC_DIR` | `static` | Front-end directory, served under `/static` |
//! | `log_level` | `ITEMLIST_LOG` | `info` | Default tracing filter (`RUST_LOG` wins) |
//! | `json_logs` | `ITEMLIST_JSON_LOGS` | `false` | Emit logs as JSON lines |
//!
//! Relative paths resolve against the working directory.

use crate::error::{ItemsError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Name of the front-end document inside `static_dir`.
pub const INDEX_FILE: &str = "index.html";

/// Configuration for the itemlist server.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    #[config(default = "127.0.0.1", env = "ITEMLIST_HOST")]
    pub host: String,

    /// Port to bind.
    #[config(default = 8000, env = "ITEMLIST_PORT")]
    pub port: u16,

    /// JSON file holding the item list.
    #[config(default = "data.json", env = "ITEMLIST_DATA_FILE")]
    pub data_file: PathBuf,

    /// Directory with the front-end; created at startup when absent.
    #[config(default = "static", env = "ITEMLIST_STATIC_DIR")]
    pub static_dir: PathBuf,

    /// Default log filter, e.g. "info" or "itemlist=debug".
    #[config(default = "info", env = "ITEMLIST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[config(default = false, env = "ITEMLIST_JSON_LOGS")]
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_file: PathBuf::from("data.json"),
            static_dir: PathBuf::from("static"),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load from the environment, then `file` if given, then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| ItemsError::Config(e.to_string()))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ItemsError::Config(format!("Invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join(INDEX_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.index_file(), PathBuf::from("static/index.html"));
    }

    #[test]
    fn test_file_values_override_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("itemlist.toml");
        fs::write(&path, "port = 9100\ndata_file = \"/var/lib/itemlist/items.json\"\n").unwrap();

        let config = ServerConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.data_file,
            PathBuf::from("/var/lib/itemlist/items.json")
        );
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let config = ServerConfig::load(Some(temp.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("itemlist.toml");
        fs::write(&path, "port = \"not a port\"\n").unwrap();

        let result = ServerConfig::load(Some(path.as_path()));
        assert!(matches!(result, Err(ItemsError::Config(_))));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8123,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8123");
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let config = ServerConfig {
            host: "not an ip".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.socket_addr(), Err(ItemsError::Config(_))));
    }
}
