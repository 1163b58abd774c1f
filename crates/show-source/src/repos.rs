//! General repository-list endpoint client.
//!
//! Second remote tier: the platform's own repository list, used when the
//! pinned-repos service fails or returns nothing. Forks are dropped and the
//! first six repositories (in the endpoint's own ordering) become projects.

use serde::Deserialize;
use show_core::{Project, truncate_tagline};

use crate::{error::SourceError, fetch::Fetcher};

/// Default base URL of the repository-list API.
pub const GITHUB_API: &str = "https://api.github.com";

/// Non-fork repositories taken from the list.
pub const MAX_REPOS: usize = 6;

#[derive(Debug, Deserialize)]
struct RepoInfo {
    name: Option<String>,
    description: Option<String>,
    html_url: Option<String>,
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    fork: bool,
}

/// Fetch the repository list for `username`, drop forks, and map the first
/// [`MAX_REPOS`] to projects with positional `order`.
///
/// # Errors
///
/// Returns [`SourceError`] if the call fails after exhausting the fetch
/// policy, or the response cannot be parsed.
pub async fn fetch_repos(
    fetcher: &Fetcher,
    base_url: &str,
    username: &str,
) -> Result<Vec<Project>, SourceError> {
    let url = format!(
        "{base_url}/users/{}/repos?sort=updated&per_page=100",
        urlencoding::encode(username.trim())
    );
    let repos: Vec<RepoInfo> = fetcher.get_json(&url).await?;
    Ok(top_projects(repos))
}

fn top_projects(repos: Vec<RepoInfo>) -> Vec<Project> {
    repos
        .into_iter()
        .filter(|repo| !repo.fork)
        .take(MAX_REPOS)
        .enumerate()
        .map(|(order, repo)| to_project(repo, order))
        .collect()
}

fn to_project(repo: RepoInfo, order: usize) -> Project {
    let description = repo.description.unwrap_or_default();
    // Unlike the pinned mapping, the language tag is always present here,
    // lowercased from an empty string when the repo has no language.
    let tags = vec![
        "github".to_string(),
        repo.language.clone().unwrap_or_default().to_lowercase(),
    ];

    Project {
        id: repo
            .name
            .clone()
            .unwrap_or_else(|| format!("project-{order}")),
        name: repo.name.unwrap_or_else(|| "Untitled".to_string()),
        tagline: truncate_tagline(&description),
        description,
        url: repo.html_url.unwrap_or_default(),
        tech_stack: repo.language.into_iter().collect(),
        metrics: [
            ("stars".to_string(), repo.stargazers_count.to_string()),
            ("forks".to_string(), repo.forks_count.to_string()),
        ]
        .into_iter()
        .collect(),
        tags,
        order: i64::try_from(order).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn repo(name: &str, fork: bool) -> RepoInfo {
        RepoInfo {
            name: Some(name.to_string()),
            description: Some(format!("{name} description")),
            html_url: Some(format!("https://github.com/octocat/{name}")),
            language: Some("Rust".to_string()),
            stargazers_count: 10,
            forks_count: 2,
            fork,
        }
    }

    const FIXTURE: &str = r#"[
        {
            "name": "terminal-portfolio",
            "description": "A portfolio you can pipe to less",
            "html_url": "https://github.com/octocat/terminal-portfolio",
            "language": "Rust",
            "stargazers_count": 128,
            "forks_count": 9,
            "fork": false
        },
        {
            "name": "some-fork",
            "html_url": "https://github.com/octocat/some-fork",
            "fork": true
        },
        {
            "name": "notes",
            "html_url": "https://github.com/octocat/notes",
            "fork": false
        }
    ]"#;

    #[test]
    fn parse_repo_list_response() {
        let repos: Vec<RepoInfo> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(repos.len(), 3);
        assert!(repos[1].fork);
        assert_eq!(repos[2].stargazers_count, 0);
    }

    #[test]
    fn forks_are_dropped() {
        let repos: Vec<RepoInfo> = serde_json::from_str(FIXTURE).unwrap();
        let projects = top_projects(repos);
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p.name != "some-fork"));
    }

    #[test]
    fn ten_repos_with_two_forks_yield_six_projects() {
        let mut repos = Vec::new();
        for i in 0..10 {
            repos.push(repo(&format!("repo-{i}"), i == 2 || i == 5));
        }
        let projects = top_projects(repos);
        assert_eq!(projects.len(), MAX_REPOS);
        // order is positional over the surviving repos, in response order
        let orders: Vec<i64> = projects.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["repo-0", "repo-1", "repo-3", "repo-4", "repo-6", "repo-7"]
        );
    }

    #[test]
    fn maps_repo_fields_to_project() {
        let repos: Vec<RepoInfo> = serde_json::from_str(FIXTURE).unwrap();
        let projects = top_projects(repos);
        let first = &projects[0];
        assert_eq!(first.id, "terminal-portfolio");
        assert_eq!(first.url, "https://github.com/octocat/terminal-portfolio");
        assert_eq!(first.tech_stack, vec!["Rust"]);
        assert_eq!(first.metrics["stars"], "128");
        assert_eq!(first.metrics["forks"], "9");
        assert_eq!(first.tags, vec!["github", "rust"]);
    }

    #[test]
    fn language_tag_is_unconditional_in_repo_mapping() {
        let repos: Vec<RepoInfo> = serde_json::from_str(FIXTURE).unwrap();
        let projects = top_projects(repos);
        let no_language = &projects[1];
        assert_eq!(no_language.name, "notes");
        assert_eq!(no_language.tags, vec!["github".to_string(), String::new()]);
        assert!(no_language.tech_stack.is_empty());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_fetch_repos() {
        let fetcher = Fetcher::new(crate::fetch::FetchPolicy::default());
        let projects = fetch_repos(&fetcher, GITHUB_API, "octocat")
            .await
            .expect("repo fetch");
        assert!(projects.len() <= MAX_REPOS);
    }
}
