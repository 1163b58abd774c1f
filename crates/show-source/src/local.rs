//! Local project-file loader.
//!
//! Reads one project per file from a directory: `*.toml` for hand-edited
//! descriptions, `*.json` for machine-written ones. Malformed files are
//! skipped with a logged warning, never fatal. The result is sorted stably
//! by `(order, name)`.

use std::fs;
use std::path::{Path, PathBuf};

use show_core::Project;

use crate::error::SourceError;

/// Load every parseable project file in `dir`.
///
/// An absent directory or one with no valid files yields an empty vec; the
/// caller then falls back to the bundled defaults.
#[must_use]
pub fn load_dir(dir: &Path) -> Vec<Project> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            tracing::debug!(dir = %dir.display(), "projects directory absent");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let mut projects = Vec::new();
    for path in paths {
        match parse_file(&path) {
            Ok(Some(project)) => projects.push(project),
            Ok(None) => {} // not a project file extension
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "skipping unparseable project file");
            }
        }
    }

    // Vec::sort_by is stable, so equal keys keep their file order.
    projects.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    projects
}

fn parse_file(path: &Path) -> Result<Option<Project>, SourceError> {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return Ok(None);
    };
    match extension {
        "toml" => {
            let text = fs::read_to_string(path)?;
            let project = toml::from_str(&text).map_err(Box::new)?;
            Ok(Some(project))
        }
        "json" => {
            let text = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&text)?))
        }
        _ => Ok(None),
    }
}
