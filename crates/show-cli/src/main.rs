use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("showcase error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let root = resolve_root(cli.project.as_deref())?;

    if let cli::Commands::Init = &cli.command {
        return commands::init::handle(&root);
    }

    let config = show_config::ShowConfig::load_or_default(&root);
    let resolver = show_source::Resolver::new(config.clone(), &root);

    match cli.command {
        cli::Commands::List => commands::list::handle(&resolver, &config).await,
        cli::Commands::Show { id } => commands::show::handle(&resolver, &id).await,
        cli::Commands::Visit { id } => commands::visit::handle(&resolver, &id).await,
        cli::Commands::Share { id } => {
            commands::share::handle(&resolver, &config, id.as_deref()).await
        }
        cli::Commands::Refresh => commands::refresh::handle(&resolver).await,
        cli::Commands::Init => unreachable!("handled before config load"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SHOWCASE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    std::env::current_dir().context("failed to read current directory")
}
