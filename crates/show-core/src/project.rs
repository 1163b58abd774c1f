//! The `Project` entity.
//!
//! A `Project` is the only domain object in Showcase. Every source (remote
//! endpoints, cache snapshot, local files, bundled defaults) produces the
//! same shape, and the presentation layer renders it without branching on
//! absent fields: `name`, `tech_stack`, `metrics` and `tags` are always
//! present (possibly empty), enforced by serde defaults plus
//! [`Project::normalize`].

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum tagline length (in characters) when derived from a description.
pub const TAGLINE_MAX_CHARS: usize = 80;

/// Display priority for projects that do not specify one. Sorts last.
const fn default_order() -> i64 {
    999
}

fn default_name() -> String {
    "Untitled".to_string()
}

/// Insertion-ordered metric map: short key -> display string.
pub type Metrics = IndexMap<String, String>;

/// A single portfolio project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Stable short identifier, unique within a resolved list.
    #[serde(default)]
    pub id: String,

    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Short description, at most [`TAGLINE_MAX_CHARS`] characters when
    /// derived from a longer description.
    #[serde(default)]
    pub tagline: String,

    /// Full free-text description. May be empty.
    #[serde(default)]
    pub description: String,

    /// Canonical link to visit. Empty means no visit/share action.
    #[serde(default)]
    pub url: String,

    /// Technologies in display order. Accepts bare strings or
    /// `{ name = "..." }` records in source files.
    #[serde(default, deserialize_with = "deserialize_tech_stack")]
    pub tech_stack: Vec<String>,

    /// Lowercase labels used for filtering.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Display priority; lower sorts first.
    #[serde(default = "default_order")]
    pub order: i64,

    /// Display metrics (stars, forks, downloads, ...), insertion-ordered.
    ///
    /// Declared last so a project serializes to valid TOML (the metrics
    /// table must follow the scalar keys).
    #[serde(default)]
    pub metrics: Metrics,
}

impl Project {
    /// Enforce the presentation invariant on a project about to leave the
    /// resolution pipeline.
    ///
    /// - a blank `name` becomes `"Untitled"`
    /// - a blank `id` is derived from the name
    /// - `tags` are lowercased
    pub fn normalize(&mut self) {
        if self.name.trim().is_empty() {
            self.name = default_name();
        }
        if self.id.trim().is_empty() {
            self.id = slugify(&self.name);
        }
        for tag in &mut self.tags {
            *tag = tag.to_lowercase();
        }
    }

    /// Sort key for local project lists: `(order ascending, name ascending)`.
    #[must_use]
    pub fn sort_key(&self) -> (i64, &str) {
        (self.order, self.name.as_str())
    }
}

/// Truncate a description to [`TAGLINE_MAX_CHARS`] characters.
///
/// Counts characters, not bytes, so multi-byte input never splits a
/// character.
#[must_use]
pub fn truncate_tagline(description: &str) -> String {
    description.chars().take(TAGLINE_MAX_CHARS).collect()
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Accept both `["Rust", "Tokio"]` and `[{ name = "Rust" }]` tech stacks.
fn deserialize_tech_stack<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TechEntry {
        Plain(String),
        Record { name: String },
    }

    let entries = Vec::<TechEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            TechEntry::Plain(name) | TechEntry::Record { name } => name,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let project: Project = serde_json::from_str(r#"{"id": "demo"}"#).unwrap();
        assert_eq!(project.name, "Untitled");
        assert_eq!(project.order, 999);
        assert!(project.tech_stack.is_empty());
        assert!(project.metrics.is_empty());
        assert!(project.tags.is_empty());
    }

    #[test]
    fn tagline_truncates_to_eighty_chars() {
        let long = "d".repeat(100);
        let tagline = truncate_tagline(&long);
        assert_eq!(tagline.chars().count(), TAGLINE_MAX_CHARS);
    }

    #[test]
    fn tagline_truncation_is_char_safe() {
        let long = "é".repeat(100);
        let tagline = truncate_tagline(&long);
        assert_eq!(tagline.chars().count(), TAGLINE_MAX_CHARS);
        assert!(tagline.chars().all(|c| c == 'é'));
    }

    #[test]
    fn short_tagline_passes_through() {
        assert_eq!(truncate_tagline("short"), "short");
    }

    #[test]
    fn tech_stack_accepts_plain_strings() {
        let project: Project =
            serde_json::from_str(r#"{"tech_stack": ["Rust", "Tokio"]}"#).unwrap();
        assert_eq!(project.tech_stack, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn tech_stack_accepts_name_records() {
        let project: Project =
            serde_json::from_str(r#"{"tech_stack": [{"name": "Rust"}, "Tokio"]}"#).unwrap();
        assert_eq!(project.tech_stack, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn tech_stack_records_parse_from_toml() {
        let project: Project = toml::from_str(
            r#"
name = "Demo"
tech_stack = [{ name = "Rust" }, "Tokio"]
"#,
        )
        .unwrap();
        assert_eq!(project.tech_stack, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn metrics_preserve_insertion_order() {
        let project: Project = serde_json::from_str(
            r#"{"metrics": {"stars": "5", "forks": "2", "downloads": "10K"}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = project.metrics.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["stars", "forks", "downloads"]);
    }

    #[test]
    fn normalize_fills_blank_name_and_id() {
        let mut project = Project {
            name: "  ".to_string(),
            ..Project::default()
        };
        project.normalize();
        assert_eq!(project.name, "Untitled");
        assert_eq!(project.id, "untitled");
    }

    #[test]
    fn normalize_slugifies_id_from_name() {
        let mut project = Project {
            name: "Agency Portfolio".to_string(),
            ..Project::default()
        };
        project.normalize();
        assert_eq!(project.id, "agency-portfolio");
    }

    #[test]
    fn normalize_lowercases_tags() {
        let mut project = Project {
            name: "Demo".to_string(),
            tags: vec!["GitHub".to_string(), "Rust".to_string()],
            ..Project::default()
        };
        project.normalize();
        assert_eq!(project.tags, vec!["github", "rust"]);
    }

    #[test]
    fn normalize_keeps_existing_id() {
        let mut project = Project {
            id: "keep-me".to_string(),
            name: "Renamed".to_string(),
            ..Project::default()
        };
        project.normalize();
        assert_eq!(project.id, "keep-me");
    }

    #[test]
    fn sort_key_orders_by_priority_then_name() {
        let a = Project {
            name: "a".to_string(),
            order: 1,
            ..Project::default()
        };
        let b = Project {
            name: "b".to_string(),
            order: 2,
            ..Project::default()
        };
        assert!(a.sort_key() < b.sort_key());
    }

    #[test]
    fn project_roundtrips_through_json() {
        let project = Project {
            id: "demo".to_string(),
            name: "Demo".to_string(),
            tagline: "A demo".to_string(),
            description: "Longer text".to_string(),
            url: "https://example.com".to_string(),
            tech_stack: vec!["Rust".to_string()],
            metrics: Metrics::from([("stars".to_string(), "5".to_string())]),
            tags: vec!["github".to_string()],
            order: 1,
        };
        let json = serde_json::to_string(&project).unwrap();
        let recovered: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, project);
    }
}
