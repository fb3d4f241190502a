//! Server configuration, read from `GARDEN_*` environment variables.

use std::env;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the plan
    pub db_path: PathBuf,
    /// Built frontend bundle served for non-API paths
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4173,
            db_path: PathBuf::from("garden_plan.db"),
            static_dir: PathBuf::from("dist"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            host: non_empty("GARDEN_HOST").unwrap_or(defaults.host),
            port: non_empty("GARDEN_PORT")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.port),
            db_path: non_empty("GARDEN_DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            static_dir: non_empty("GARDEN_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:4173");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GARDEN_HOST", "127.0.0.1"),
            ("GARDEN_PORT", "8080"),
            ("GARDEN_DB_PATH", "/var/lib/garden/plan.db"),
            ("GARDEN_STATIC_DIR", "/srv/garden"),
        ]
        .into_iter()
        .collect();
        let config = ServerConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.db_path, PathBuf::from("/var/lib/garden/plan.db"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/garden"));
    }

    #[test]
    fn test_bad_port_keeps_default() {
        let config = ServerConfig::from_lookup(|name| (name == "GARDEN_PORT").then(|| "garden".to_string()));
        assert_eq!(config.port, 4173);
    }
}
