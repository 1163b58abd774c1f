//! Cache snapshot store.
//!
//! One JSON file holding `{ timestamp, projects }`, overwritten whole on
//! every successful remote fetch. A snapshot is only trusted when it is
//! parseable, younger than the TTL and non-empty; everything else is a
//! miss. Writes are best-effort: a failed save is logged, never raised.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use show_core::Project;

use crate::error::SourceError;

/// The persisted cache file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// When the snapshot was written (RFC 3339).
    pub timestamp: DateTime<Utc>,
    /// The fetched project list, in display order.
    pub projects: Vec<Project>,
}

/// Load the cached project list if it is still trustworthy.
///
/// Returns `None` (a miss) when the file does not exist, cannot be parsed,
/// its timestamp is invalid, the snapshot is older than `ttl_minutes`, or
/// the cached list is empty. An empty cached list is deliberately a miss:
/// serving it until expiry would pin the UI to an empty carousel, so the
/// caller re-fetches instead.
#[must_use]
pub fn load(path: &Path, ttl_minutes: u64) -> Option<Vec<Project>> {
    let snapshot = match read_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(error) => {
            if path.exists() {
                tracing::warn!(path = %path.display(), %error, "unreadable cache snapshot, treating as miss");
            }
            return None;
        }
    };

    // A TTL beyond chrono's representable range just means "never expires".
    let ttl = i64::try_from(ttl_minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .unwrap_or(Duration::MAX);
    let age = Utc::now().signed_duration_since(snapshot.timestamp);
    if age >= ttl {
        tracing::debug!(path = %path.display(), "cache snapshot expired");
        return None;
    }
    if snapshot.projects.is_empty() {
        tracing::debug!(path = %path.display(), "empty cache snapshot treated as miss");
        return None;
    }

    Some(snapshot.projects)
}

/// Overwrite the cache file with a fresh snapshot. Best-effort: failures
/// are logged at warn and swallowed.
pub fn save(path: &Path, projects: &[Project]) {
    if let Err(error) = write_snapshot(path, projects) {
        tracing::warn!(path = %path.display(), %error, "failed to write cache snapshot");
    }
}

fn read_snapshot(path: &Path) -> Result<CacheSnapshot, SourceError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_snapshot(path: &Path, projects: &[Project]) -> Result<(), SourceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let snapshot = CacheSnapshot {
        timestamp: Utc::now(),
        projects: projects.to_vec(),
    };
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}
