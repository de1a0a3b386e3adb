//! Server configuration read from the environment
//!
//! Variables (a `.env` file is honoured by the binaries):
//!   NETVIZ_BIND_ADDR - listen address (default: 0.0.0.0:8000)
//!   NETVIZ_SEED      - fixed RNG seed for graph generation (default: entropy)

use crate::error::ConfigError;
use crate::graph::GenerateParams;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Size of the graph `/filter/` generates for itself
pub const FILTER_GRAPH_NODES: usize = 20;
pub const FILTER_GRAPH_EDGE_PROBABILITY: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Used when a request does not carry its own seed
    pub seed: Option<u64>,
    pub filter_graph: GenerateParams,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed: None,
            filter_graph: GenerateParams {
                node_count: FILTER_GRAPH_NODES,
                edge_probability: FILTER_GRAPH_EDGE_PROBABILITY,
            },
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure over a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("NETVIZ_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().to_string();
        }

        if let Some(raw) = lookup("NETVIZ_SEED").filter(|v| !v.trim().is_empty()) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "NETVIZ_SEED",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.filter_graph.node_count, 20);
    }

    #[test]
    fn reads_bind_addr_and_seed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("NETVIZ_BIND_ADDR", "127.0.0.1:9000"),
            ("NETVIZ_SEED", " 42 "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn rejects_bad_seed() {
        let err = ServerConfig::from_lookup(lookup_from(&[("NETVIZ_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("NETVIZ_SEED"));
    }
}
