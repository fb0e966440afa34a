use anyhow::{Context, Result};
use std::path::PathBuf;

use callboard_client::{Config, DataLoader};
use callboard_core::{LineupBoard, SignupForm};

/// Which page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Board {
    Signup,
    Lineup,
}

/// Load a board's data and write its rendered HTML.
pub async fn run_render(config: &Config, board: Board, out: Option<PathBuf>) -> Result<()> {
    let loader = DataLoader::new()?;

    let html = match board {
        Board::Signup => {
            let source = config.performances_source()?;
            let records = loader
                .load_performances(&source)
                .await
                .with_context(|| format!("Failed to load performances from {source}"))?;
            let mut form = SignupForm::new(&config.form_name);
            let count = form.populate(&records);
            log::info!("Rendered {count} performance cards");
            form.to_html()
        }
        Board::Lineup => {
            let source = config.lineups_source()?;
            let records = loader
                .load_lineups(&source)
                .await
                .with_context(|| format!("Failed to load lineups from {source}"))?;
            let mut board = LineupBoard::new();
            let count = board.populate(&records);
            log::info!("Rendered {count} lineup cards");
            board.to_html()
        }
    };

    super::write_output(out.as_deref(), &html)
}
