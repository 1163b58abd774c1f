//! Remote fetch policy configuration.

use serde::{Deserialize, Serialize};

/// Default attempt ceiling per remote call.
const fn default_max_attempts() -> u32 {
    3
}

/// Default per-attempt timeout in seconds.
const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Attempts per remote call before the tier is treated as failed.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Per-attempt timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = FetchConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.timeout_secs, 15);
    }
}
