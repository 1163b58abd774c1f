//! `showcase visit <id>`: open a project's URL in the default handler.

use anyhow::Context;
use show_source::Resolver;

use crate::commands::find_project;

pub async fn handle(resolver: &Resolver, id: &str) -> anyhow::Result<()> {
    let resolution = resolver.resolve().await;
    let project = find_project(&resolution.projects, id)?;

    if project.url.is_empty() {
        anyhow::bail!("project '{}' has no URL to visit", project.id);
    }

    open::that(&project.url)
        .with_context(|| format!("failed to open {}", project.url))?;
    println!("opened {}", project.url);
    Ok(())
}
