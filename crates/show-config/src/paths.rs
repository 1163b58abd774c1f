//! Well-known paths inside a showcase project directory.

use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const LOCAL_CONFIG_FILE: &str = ".showcase/config.toml";

/// Cache snapshot file, relative to the project root.
pub const CACHE_FILE: &str = ".showcase/cache.json";

/// Local project-description directory, relative to the project root.
pub const PROJECTS_DIR: &str = "projects";

/// Absolute path of the cache snapshot for `root`.
#[must_use]
pub fn cache_file(root: &Path) -> PathBuf {
    root.join(CACHE_FILE)
}

/// Absolute path of the local projects directory for `root`.
#[must_use]
pub fn projects_dir(root: &Path) -> PathBuf {
    root.join(PROJECTS_DIR)
}

/// Absolute path of the project-local config file for `root`.
#[must_use]
pub fn local_config(root: &Path) -> PathBuf {
    root.join(LOCAL_CONFIG_FILE)
}
