//! Server configuration.

use std::path::PathBuf;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds, `FERIADOS_ADDR`.
    pub addr: String,
    /// Optional CSV with the full town list, `FERIADOS_REGIONS`. Unset
    /// means the bundled region table.
    pub regions_path: Option<PathBuf>,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl ServerConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let addr = std::env::var("FERIADOS_ADDR").unwrap_or_else(|_| default_addr());
        let regions_path = std::env::var_os("FERIADOS_REGIONS").map(PathBuf::from);
        ServerConfig { addr, regions_path }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: default_addr(),
            regions_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert!(config.regions_path.is_none());
    }
}
