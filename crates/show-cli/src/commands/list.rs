//! `showcase list`: resolve and render every project card.

use show_config::ShowConfig;
use show_source::Resolver;

use crate::output;

pub async fn handle(resolver: &Resolver, config: &ShowConfig) -> anyhow::Result<()> {
    let resolution = resolver.resolve().await;

    println!(
        "{}",
        output::render_header(&config.owner.name, &config.owner.tagline, &resolution)
    );
    for project in &resolution.projects {
        println!("{}\n", output::render_card(project));
    }

    Ok(())
}
