//! Configuration - defaults, then a JSON file, then environment.
//!
//! | Env var | Field |
//! |---------|-------|
//! | `BTCAUDIT_NETWORK` | `network` (mainnet/testnet) |
//! | `BTCAUDIT_BACKEND` | `backend` (electrum/btcd) |
//! | `BTCAUDIT_SERVER` | `server` (`host:port`, `[ipv6]:port`) |
//!
//! Empty environment values are ignored.

use crate::endpoint::{self, Backend, Endpoint};
use crate::error::Result;
use crate::network::Network;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_NETWORK: &str = "BTCAUDIT_NETWORK";
pub const ENV_BACKEND: &str = "BTCAUDIT_BACKEND";
pub const ENV_SERVER: &str = "BTCAUDIT_SERVER";
pub const ENV_CONFIG: &str = "BTCAUDIT_CONFIG";

/// Which network and backend to use, and optionally which server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network used for defaults (default: mainnet).
    pub network: Network,
    /// Backend kind used for defaults (default: electrum).
    pub backend: Backend,
    /// Raw server spec; `None` selects the default server.
    pub server: Option<String>,
}

impl Config {
    pub fn new(network: Network, backend: Backend) -> Self {
        Self { network, backend, server: None }
    }

    pub fn with_network(mut self, network: Network) -> Self { self.network = network; self }
    pub fn with_backend(mut self, backend: Backend) -> Self { self.backend = backend; self }
    pub fn with_server(mut self, server: impl Into<String>) -> Self { self.server = Some(server.into()); self }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Overlay `BTCAUDIT_*` environment variables.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        if let Some(network) = get(ENV_NETWORK) {
            self.network = network.parse()?;
        }
        if let Some(backend) = get(ENV_BACKEND) {
            self.backend = backend.parse()?;
        }
        if let Some(server) = get(ENV_SERVER) {
            self.server = Some(server);
        }
        Ok(self)
    }

    /// Resolve the configured server, falling back to the default table.
    pub fn resolve_server(&self) -> Result<Endpoint> {
        endpoint::resolve(self.network, self.backend, self.server.as_deref().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_config_builder() {
        let config = Config::default()
            .with_network(Network::Testnet)
            .with_backend(Backend::Btcd)
            .with_server("node:18334");
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.backend, Backend::Btcd);
        assert_eq!(config.server.as_deref(), Some("node:18334"));
    }

    #[test]
    fn test_apply_vars_overrides() {
        let env = vars(&[(ENV_NETWORK, "testnet"), (ENV_BACKEND, "btcd"), (ENV_SERVER, "")]);
        let config = Config::default().apply_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config, Config::new(Network::Testnet, Backend::Btcd));
        assert_eq!(config.resolve_server().unwrap(), Endpoint::new("localhost", "18334"));
    }

    #[test]
    fn test_apply_vars_rejects_unknown_backend() {
        let env = vars(&[(ENV_BACKEND, "esplora")]);
        let err = Config::default().apply_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, Error::InvalidEnum { kind: "backend", .. }));
    }

    #[test]
    fn test_partial_json() {
        let config: Config = serde_json::from_str(r#"{"backend": "btcd", "extra": 1}"#).unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.backend, Backend::Btcd);
        assert_eq!(config.server, None);
    }
}
