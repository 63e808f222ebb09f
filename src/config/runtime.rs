use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_LOG_FILTER};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Process-level settings taken from the environment (and `.env`, if present).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    /// Directory for rolling log files
    pub log_dir: String,
    /// `EnvFilter` directive for both console and file output
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub fn load_runtime_config() -> RuntimeConfig {
    dotenv().ok(); // Load .env file if it exists, plain env vars work as well

    let defaults = RuntimeConfig::default();
    RuntimeConfig {
        log_dir: non_empty_var("GRID_VALIDATOR_LOG_DIR").unwrap_or(defaults.log_dir),
        log_filter: non_empty_var("GRID_VALIDATOR_LOG").unwrap_or(defaults.log_filter),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_config_from_env() {
        env::set_var("GRID_VALIDATOR_LOG_DIR", "/tmp/grid-validator-logs");
        env::set_var("GRID_VALIDATOR_LOG", "  ");
        let config = load_runtime_config();
        assert_eq!(config.log_dir, "/tmp/grid-validator-logs");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        env::remove_var("GRID_VALIDATOR_LOG_DIR");
        env::remove_var("GRID_VALIDATOR_LOG");
    }
}
