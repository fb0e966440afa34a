use anyhow::{Context, Result};
use std::path::PathBuf;

use callboard_core::model::LineupRecord;
use callboard_core::report::{performer_appearances, read_json_array};

/// Print how many performer groups list each person, most frequent first.
pub fn show_appearances(files: &[PathBuf]) -> Result<()> {
    let mut lineups: Vec<LineupRecord> = Vec::new();
    for path in files {
        let records: Vec<LineupRecord> = read_json_array(path)
            .with_context(|| format!("Failed to read lineups from {}", path.display()))?;
        log::info!("Read {} lineups from {}", records.len(), path.display());
        lineups.extend(records);
    }

    let counts = performer_appearances(&lineups);
    if counts.is_empty() {
        println!("No performers listed.");
        return Ok(());
    }

    println!("Performer appearances ({} lineups):", lineups.len());
    for (performer, count) in counts {
        println!("  {count:>4}  {performer}");
    }

    Ok(())
}
