//! Client configuration.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Address of the canonical registry deployment queried by default.
pub const DEFAULT_REGISTRY: &str = "0x06FE76B2f432fdfEcAEf1a7d4f6C3d41B5861672";

/// Connection settings for a [`DeFiSdk`](crate::DeFiSdk) client.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeFiSdkConfig {
    #[serde(rename = "node-url")]
    pub node_url: String,
    #[serde(rename = "registry-address", default = "default_registry")]
    pub registry_address: String,
}

fn default_registry() -> String {
    DEFAULT_REGISTRY.to_string()
}

impl DeFiSdkConfig {
    /// Settings for a node endpoint and the default registry deployment.
    pub fn new(node_url: &str) -> Self {
        DeFiSdkConfig {
            node_url: node_url.to_string(),
            registry_address: default_registry(),
        }
    }

    /// Reads settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_defaults_to_the_canonical_deployment() {
        let config = DeFiSdkConfig::new("https://node.example");
        assert_eq!(config.registry_address, DEFAULT_REGISTRY);
    }

    #[test]
    fn parses_toml_with_and_without_registry_override() {
        let config: DeFiSdkConfig =
            toml::from_str("node-url = \"https://node.example\"").unwrap();
        assert_eq!(config.node_url, "https://node.example");
        assert_eq!(config.registry_address, DEFAULT_REGISTRY);

        let config: DeFiSdkConfig = toml::from_str(
            "node-url = \"https://node.example\"\nregistry-address = \"0x42\"",
        )
        .unwrap();
        assert_eq!(config.registry_address, "0x42");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DeFiSdkConfig::new("https://node.example");
        let encoded = toml::to_string(&config).unwrap();
        let decoded: DeFiSdkConfig = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.node_url, config.node_url);
        assert_eq!(decoded.registry_address, config.registry_address);
    }
}
