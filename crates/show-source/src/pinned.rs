//! Pinned-repositories endpoint client.
//!
//! First remote tier: a third-party aggregation service that returns a
//! user's pinned repositories (the primary API does not expose them).

use serde::Deserialize;
use show_core::{Project, truncate_tagline};

use crate::{error::SourceError, fetch::Fetcher};

/// Default base URL of the pinned-repos aggregation service.
pub const PINNED_ENDPOINT: &str = "https://gh-pinned-repos-tsj7ta5xfhep.deno.dev";

#[derive(Debug, Deserialize)]
struct PinnedRepo {
    repo: Option<String>,
    description: Option<String>,
    link: Option<String>,
    language: Option<String>,
    // The aggregation service is loose about numeric types; stars can come
    // back as a number or a pre-formatted string like "1.2k".
    #[serde(default)]
    stars: serde_json::Value,
    #[serde(default)]
    forks: serde_json::Value,
}

/// Fetch pinned repositories for `username` and map them to projects.
///
/// Response order becomes `order` (0-based).
///
/// # Errors
///
/// Returns [`SourceError`] if the call fails after exhausting the fetch
/// policy, or the response cannot be parsed.
pub async fn fetch_pinned(
    fetcher: &Fetcher,
    base_url: &str,
    username: &str,
) -> Result<Vec<Project>, SourceError> {
    let url = format!(
        "{base_url}/?username={}",
        urlencoding::encode(username.trim())
    );
    let pinned: Vec<PinnedRepo> = fetcher.get_json(&url).await?;
    Ok(pinned
        .into_iter()
        .enumerate()
        .map(|(order, repo)| to_project(repo, order))
        .collect())
}

fn to_project(pinned: PinnedRepo, order: usize) -> Project {
    let description = pinned.description.unwrap_or_default();
    let mut tags = vec!["github".to_string()];
    if let Some(language) = &pinned.language {
        tags.push(language.to_lowercase());
    }

    Project {
        id: pinned
            .repo
            .clone()
            .unwrap_or_else(|| format!("project-{order}")),
        name: pinned.repo.unwrap_or_else(|| "Untitled".to_string()),
        tagline: truncate_tagline(&description),
        description,
        url: pinned.link.unwrap_or_default(),
        tech_stack: pinned.language.into_iter().collect(),
        metrics: [
            ("stars".to_string(), display_count(&pinned.stars)),
            ("forks".to_string(), display_count(&pinned.forks)),
        ]
        .into_iter()
        .collect(),
        tags,
        order: i64::try_from(order).unwrap_or(i64::MAX),
    }
}

/// Render a loosely-typed count as a display string. Missing counts show
/// as "0".
fn display_count(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "0".to_string(),
        other => other.to_string(),
    }
}
