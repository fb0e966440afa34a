pub mod appearances;
pub mod config;
pub mod render;
pub mod signup;
pub mod tally;

pub use appearances::show_appearances;
pub use render::run_render;
pub use signup::run_signup;
pub use tally::run_tally;

use anyhow::{Context, Result};
use std::path::Path;

/// Write `contents` to `out`, or to stdout when no path is given.
fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {}", path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}
