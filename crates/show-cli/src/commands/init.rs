//! `showcase init`: scaffold a starter config and sample project files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use show_config::paths;
use show_core::bundled_projects;

const STARTER_CONFIG: &str = r#"# Showcase configuration. Every key is optional.

[owner]
name = "Showcase"
tagline = "Building Digital Excellence"
# website = "https://example.dev"

[github]
# Source projects from GitHub pinned repositories instead of local files:
# use_pinned = true
# username = "octocat"
# cache_ttl_minutes = 30
# tls = "strict"   # "lenient" permits a downgrade on certificate failures

[fetch]
# max_attempts = 3
# timeout_secs = 15
"#;

/// Create `.showcase/config.toml` and a `projects/` directory seeded with
/// the sample projects. Existing files are left untouched.
pub fn handle(root: &Path) -> anyhow::Result<()> {
    let config_path = paths::local_config(root);
    if config_path.exists() {
        println!("config already exists: {}", config_path.display());
    } else {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("failed to create .showcase directory")?;
        }
        fs::write(&config_path, STARTER_CONFIG).context("failed to write starter config")?;
        println!("created {}", config_path.display());
    }

    let projects_dir = paths::projects_dir(root);
    fs::create_dir_all(&projects_dir).context("failed to create projects directory")?;

    let mut created = 0usize;
    for project in bundled_projects() {
        let path = projects_dir.join(format!("{}.toml", project.id));
        if path.exists() {
            continue;
        }
        let text = toml::to_string_pretty(&project)
            .with_context(|| format!("failed to serialize sample project '{}'", project.id))?;
        fs::write(&path, text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        created += 1;
    }

    if created > 0 {
        println!("created {created} sample project(s) in {}", projects_dir.display());
    } else {
        println!("projects directory already populated: {}", projects_dir.display());
    }

    Ok(())
}
