use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio::app::AppContext;
use folio::cli::{commands, Cli, Commands};
use folio::config::Config;
use folio::route::Route;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { route: Route::Home });

    // The TUI owns the terminal, so its logs go to a file.
    let log_file = match (&command, cli.log) {
        (_, Some(path)) => Some(path),
        (Commands::Tui { .. }, None) => default_log_path(),
        _ => None,
    };
    init_tracing(log_file)?;

    let config = Config::load()?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    let ctx = AppContext::new(&api_url)?;

    match command {
        Commands::Tui { route } => {
            folio::tui::run(Arc::new(ctx), Arc::new(config), route).await?;
        }
        Commands::Repos => {
            commands::list_repositories(&ctx).await?;
        }
        Commands::Repo { id } => {
            commands::show_repository(&ctx, &id).await?;
        }
        Commands::Posts => {
            commands::list_articles(&ctx).await?;
        }
        Commands::Videos => {
            commands::list_videos(&ctx).await?;
        }
    }

    Ok(())
}

fn init_tracing(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

/// `<data_dir>/folio/folio.log`
fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("folio").join("folio.log"))
}
