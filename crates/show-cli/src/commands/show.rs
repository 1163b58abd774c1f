//! `showcase show <id>`: render one project in full detail.

use show_source::Resolver;

use crate::{commands::find_project, output};

pub async fn handle(resolver: &Resolver, id: &str) -> anyhow::Result<()> {
    let resolution = resolver.resolve().await;
    let project = find_project(&resolution.projects, id)?;
    println!("{}", output::render_detail(project));
    Ok(())
}
