use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

use callboard_core::model::FormResult;
use callboard_core::report::{read_json_array, tally};

/// Group submitted availability by performance and write it as JSON.
pub fn run_tally(submissions: &Path, out: Option<PathBuf>) -> Result<()> {
    let results: Vec<FormResult> = read_json_array(submissions)
        .with_context(|| format!("Failed to read submissions from {}", submissions.display()))?;
    log::info!("Tallying {} submissions", results.len());

    let json = to_four_space_json(&tally(&results))?;
    super::write_output(out.as_deref(), &json)
}

fn to_four_space_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
