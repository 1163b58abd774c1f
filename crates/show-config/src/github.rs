//! GitHub source configuration.

use serde::{Deserialize, Serialize};

/// Default cache TTL in minutes.
const fn default_cache_ttl_minutes() -> u64 {
    30
}

/// TLS certificate validation mode for remote fetches.
///
/// `Lenient` permits a downgrade to a non-verifying client after a
/// certificate failure within a single call's retry budget. It is opt-in;
/// the default never skips verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Whether to source projects from GitHub pinned repositories.
    #[serde(default)]
    pub use_pinned: bool,

    /// GitHub username to fetch for.
    #[serde(default)]
    pub username: String,

    /// Maximum age of the cache snapshot before a re-fetch.
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,

    /// Certificate validation mode for the remote endpoints.
    #[serde(default)]
    pub tls: TlsMode,
}

impl GithubConfig {
    /// Whether the resolution pipeline should take the remote path.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.use_pinned && !self.username.trim().is_empty()
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            use_pinned: false,
            username: String::new(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
            tls: TlsMode::default(),
        }
    }
}
