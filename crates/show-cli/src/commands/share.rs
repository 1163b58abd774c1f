//! `showcase share [id]`: print a share URL.
//!
//! With an id, prints that project's URL; without one, the owner's
//! portfolio website. QR encoding is an external collaborator: any encoder
//! can consume the printed URL.

use show_config::ShowConfig;
use show_source::Resolver;

use crate::commands::find_project;

pub async fn handle(
    resolver: &Resolver,
    config: &ShowConfig,
    id: Option<&str>,
) -> anyhow::Result<()> {
    let url = match id {
        Some(id) => {
            let resolution = resolver.resolve().await;
            let project = find_project(&resolution.projects, id)?;
            if project.url.is_empty() {
                anyhow::bail!("project '{}' has no URL to share", project.id);
            }
            project.url.clone()
        }
        None => {
            if config.owner.website.is_empty() {
                anyhow::bail!("no owner.website configured, nothing to share");
            }
            config.owner.website.clone()
        }
    };

    println!("{url}");
    Ok(())
}
