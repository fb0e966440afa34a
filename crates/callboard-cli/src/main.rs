use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use callboard_client::Config;

mod commands;
mod logging;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "callboard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the published site (overrides config and CALLBOARD_SITE_URL)
    #[arg(long, global = true)]
    site_url: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Render a board to static HTML
    ///
    /// Loads the configured data file and renders one card per record, in
    /// file order:
    ///
    /// - signup: the performance form with Free / Maybe / Busy options
    /// - lineup: the lineup board with performer groups
    ///
    /// The HTML fragment is written to --out, or to stdout.
    Render {
        /// Which board to render
        #[arg(value_enum)]
        board: commands::render::Board,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fill in and submit the availability form interactively
    ///
    /// Loads the performances, shows one row per performance, and posts the
    /// completed form to the site's endpoint. Requires site_url.
    Signup,
    /// Tally collected submissions per performance
    Tally {
        /// JSON array of submitted form results
        submissions: PathBuf,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count how often each performer appears across lineup files
    Appearances {
        /// Lineup JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_with_site_url(cli.site_url)?;

    // The signup form owns the terminal.
    if !matches!(cli.command, Commands::Signup) {
        logging::init(&config.logging)?;
    }

    match cli.command {
        Commands::Render { board, out } => {
            commands::run_render(&config, board, out).await?;
        }
        Commands::Signup => {
            commands::run_signup(&config).await?;
        }
        Commands::Tally { submissions, out } => {
            commands::run_tally(&submissions, out)?;
        }
        Commands::Appearances { files } => {
            commands::show_appearances(&files)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
