//! `showcase refresh`: force a fresh fetch, bypassing the cache.

use show_source::Resolver;

pub async fn handle(resolver: &Resolver) -> anyhow::Result<()> {
    let resolution = resolver.refresh().await;
    println!(
        "refreshed: {} projects ({})",
        resolution.projects.len(),
        resolution.origin
    );
    Ok(())
}
