pub mod commands;

use clap::{Parser, Subcommand};

use crate::api::API_URL_ENV;
use crate::route::Route;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio of repositories, articles and videos", long_about = None)]
pub struct Cli {
    /// Base origin of the portfolio API
    #[arg(long, env = API_URL_ENV, global = true)]
    pub api_url: Option<String>,

    /// Write logs to this file (the TUI defaults to the data directory)
    #[arg(long, global = true)]
    pub log: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (the default)
    Tui {
        /// Start on this route: /, /github, /medium or /youtube
        #[arg(short, long, default_value = "/")]
        route: Route,
    },
    /// Print repositories
    Repos,
    /// Print one repository with its summaries
    Repo {
        /// Repository id
        id: String,
    },
    /// Print articles
    Posts,
    /// Print videos
    Videos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_tui_route_flag() {
        let cli = Cli::try_parse_from(["folio", "tui", "--route", "/youtube"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Tui {
                route: Route::Videos
            })
        ));
    }

    #[test]
    fn test_tui_rejects_unknown_route() {
        assert!(Cli::try_parse_from(["folio", "tui", "--route", "/twitter"]).is_err());
    }

    #[test]
    fn test_api_url_flag_is_global() {
        let cli = Cli::try_parse_from(["folio", "repo", "r1", "--api-url", "http://localhost:3000"])
            .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
        assert!(matches!(cli.command, Some(Commands::Repo { ref id }) if id == "r1"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
