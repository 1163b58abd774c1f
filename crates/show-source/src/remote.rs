//! Two-tier remote fetch.
//!
//! Tier one is the pinned-repos service, tier two the general repository
//! list. A non-empty result from either tier wins; total failure returns
//! `None` so the orchestrator can fall further down the chain.

use show_core::Project;

use crate::{fetch::Fetcher, pinned, repos};

/// Endpoint base URLs for the two remote tiers.
///
/// Defaults point at the live services; tests substitute unroutable
/// addresses to exercise failure paths offline.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Pinned-repos aggregation service base URL.
    pub pinned_base: String,
    /// Repository-list API base URL.
    pub github_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            pinned_base: pinned::PINNED_ENDPOINT.to_string(),
            github_api: repos::GITHUB_API.to_string(),
        }
    }
}

/// Fetch projects for `username` from the remote tiers, in order.
///
/// `None` means total remote failure: both endpoints failed or returned
/// nothing usable. Errors never propagate; they are logged and absorbed
/// here.
pub async fn fetch_remote_projects(
    fetcher: &Fetcher,
    endpoints: &Endpoints,
    username: &str,
) -> Option<Vec<Project>> {
    match pinned::fetch_pinned(fetcher, &endpoints.pinned_base, username).await {
        Ok(projects) if !projects.is_empty() => return Some(projects),
        Ok(_) => {
            tracing::info!(username, "pinned endpoint returned no projects, trying repo list");
        }
        Err(error) => {
            tracing::warn!(username, %error, "pinned endpoint failed, trying repo list");
        }
    }

    match repos::fetch_repos(fetcher, &endpoints.github_api, username).await {
        Ok(projects) if !projects.is_empty() => Some(projects),
        Ok(_) => {
            tracing::warn!(username, "repository list is empty");
            None
        }
        Err(error) => {
            tracing::warn!(username, %error, "repository list fetch failed");
            None
        }
    }
}
