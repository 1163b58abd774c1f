use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `showcase` binary.
#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Showcase - portfolio project cards")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a starter config and sample project files
    Init,
    /// Resolve the project list and render every card
    List,
    /// Render one project card in full detail
    Show {
        /// Project id (or name)
        id: String,
    },
    /// Open a project's URL in the default handler
    Visit {
        /// Project id (or name)
        id: String,
    },
    /// Print a project's share URL (or the portfolio URL with no id)
    Share {
        /// Project id (or name); omit to share the whole portfolio
        id: Option<String>,
    },
    /// Force a fresh remote fetch, bypassing the cache
    Refresh,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["showcase", "--verbose", "list"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["showcase", "list", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn show_requires_an_id() {
        assert!(Cli::try_parse_from(["showcase", "show"]).is_err());
        let cli = Cli::try_parse_from(["showcase", "show", "demo"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Show { id } if id == "demo"));
    }

    #[test]
    fn share_id_is_optional() {
        let cli = Cli::try_parse_from(["showcase", "share"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Share { id: None }));

        let cli = Cli::try_parse_from(["showcase", "share", "demo"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Share { id: Some(id) } if id == "demo"));
    }

    #[test]
    fn project_flag_is_global() {
        let cli = Cli::try_parse_from(["showcase", "refresh", "--project", "/tmp/demo"])
            .expect("cli should parse");
        assert_eq!(cli.project.as_deref(), Some("/tmp/demo"));
        assert!(matches!(cli.command, Commands::Refresh));
    }
}
