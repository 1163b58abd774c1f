//! Resolution orchestrator.
//!
//! Applies the fallback chain and returns the final project list. The
//! chain is an explicit ordered tier plan rather than nested conditionals,
//! so adding or removing a tier is a one-line change and each tier is
//! testable on its own:
//!
//! ```text
//! remote mode:  [Cache, Remote]  -> bundled
//! local mode:   [Local]          -> bundled
//! ```
//!
//! No error from any tier escapes [`Resolver::resolve`]; the only
//! observable failure mode is degraded content (bundled defaults instead
//! of live data).

use std::fmt;
use std::path::{Path, PathBuf};

use show_config::{ShowConfig, paths};
use show_core::{Project, bundled_projects};

use crate::{
    cache,
    fetch::{FetchPolicy, Fetcher},
    local,
    remote::{self, Endpoints},
};

/// A data-source tier in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// TTL'd snapshot of a previous remote fetch.
    Cache,
    /// Two-tier remote fetch (pinned repos, then repo list).
    Remote,
    /// Project-description files on disk.
    Local,
}

/// Where the resolved list ultimately came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Remote,
    Local,
    Bundled,
}

impl From<Tier> for Origin {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Cache => Self::Cache,
            Tier::Remote => Self::Remote,
            Tier::Local => Self::Local,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cache => "cache",
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Bundled => "bundled",
        };
        f.write_str(label)
    }
}

/// The orchestrator's terminal output: always a non-empty, normalized list.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Which tier produced the list.
    pub origin: Origin,
    /// The projects, in display order.
    pub projects: Vec<Project>,
}

/// Applies the fallback chain for one project root.
pub struct Resolver {
    config: ShowConfig,
    cache_path: PathBuf,
    projects_dir: PathBuf,
    fetcher: Fetcher,
    endpoints: Endpoints,
}

impl Resolver {
    /// Build a resolver for the project rooted at `root`.
    #[must_use]
    pub fn new(config: ShowConfig, root: &Path) -> Self {
        let policy = FetchPolicy::from_config(&config.fetch, config.github.tls);
        Self {
            cache_path: paths::cache_file(root),
            projects_dir: paths::projects_dir(root),
            fetcher: Fetcher::new(policy),
            endpoints: Endpoints::default(),
            config,
        }
    }

    /// Override the remote endpoint base URLs (tests, mirrors).
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// The ordered tier plan for the current configuration.
    ///
    /// Remote mode requires `github.use_pinned` and a username; anything
    /// else resolves locally. The bundled defaults are the implicit
    /// terminal fallback and never appear in the plan.
    #[must_use]
    pub fn plan(&self) -> Vec<Tier> {
        if self.config.github.is_remote() {
            vec![Tier::Cache, Tier::Remote]
        } else {
            vec![Tier::Local]
        }
    }

    /// Resolve the project list, trying each tier in order.
    ///
    /// Never fails and never returns an empty list.
    pub async fn resolve(&self) -> Resolution {
        self.resolve_plan(&self.plan()).await
    }

    /// Resolve while skipping the cache tier, forcing a fresh fetch in
    /// remote mode. The cache is still rewritten on success.
    pub async fn refresh(&self) -> Resolution {
        let plan: Vec<Tier> = self
            .plan()
            .into_iter()
            .filter(|tier| *tier != Tier::Cache)
            .collect();
        self.resolve_plan(&plan).await
    }

    async fn resolve_plan(&self, plan: &[Tier]) -> Resolution {
        for tier in plan {
            if let Some(mut projects) = self.load_tier(*tier).await {
                tracing::info!(tier = %Origin::from(*tier), count = projects.len(), "projects resolved");
                normalize_all(&mut projects);
                return Resolution {
                    origin: Origin::from(*tier),
                    projects,
                };
            }
        }

        tracing::warn!("all sources failed, serving bundled defaults");
        let mut projects = bundled_projects();
        normalize_all(&mut projects);
        Resolution {
            origin: Origin::Bundled,
            projects,
        }
    }

    /// Load one tier. `None` means the tier produced nothing usable and
    /// the chain advances.
    async fn load_tier(&self, tier: Tier) -> Option<Vec<Project>> {
        match tier {
            Tier::Cache => cache::load(&self.cache_path, self.config.github.cache_ttl_minutes),
            Tier::Remote => {
                let projects = remote::fetch_remote_projects(
                    &self.fetcher,
                    &self.endpoints,
                    &self.config.github.username,
                )
                .await?;
                cache::save(&self.cache_path, &projects);
                Some(projects)
            }
            Tier::Local => {
                let projects = local::load_dir(&self.projects_dir);
                (!projects.is_empty()).then_some(projects)
            }
        }
    }
}

fn normalize_all(projects: &mut [Project]) {
    for project in projects {
        project.normalize();
    }
}
