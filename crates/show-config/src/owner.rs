//! Portfolio owner configuration.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Showcase".to_string()
}

fn default_tagline() -> String {
    "Building Digital Excellence".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnerConfig {
    /// Display name shown in the header.
    #[serde(default = "default_name")]
    pub name: String,

    /// Short tagline shown under the header.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Portfolio website, used by the "share all" action.
    #[serde(default)]
    pub website: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            website: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OwnerConfig::default();
        assert_eq!(config.name, "Showcase");
        assert_eq!(config.tagline, "Building Digital Excellence");
        assert!(config.website.is_empty());
    }
}
