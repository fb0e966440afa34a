use anyhow::{Context, Result};

use callboard_client::{Config, DataLoader, HttpEndpoint, Submitter};
use callboard_core::SignupForm;

use crate::tui;

/// Load the performances and run the interactive signup form.
pub async fn run_signup(config: &Config) -> Result<()> {
    let endpoint_url = config
        .submit_url()
        .context("Submitting needs a site URL; pass --site-url or set site_url")?;

    let source = config.performances_source()?;
    let records = DataLoader::new()?
        .load_performances(&source)
        .await
        .with_context(|| format!("Failed to load performances from {source}"))?;

    if records.is_empty() {
        println!("No performances listed in {source}.");
        return Ok(());
    }

    let mut form = SignupForm::new(&config.form_name);
    form.populate(&records);

    let duplicates = form.duplicate_ids();
    if !duplicates.is_empty() {
        eprintln!(
            "Warning: several performances share an identifier ({}); their answers will be indistinguishable.",
            duplicates.join(", ")
        );
    }

    let submitter = Submitter::new(HttpEndpoint::new(endpoint_url)?);
    tui::run_signup(form, &submitter).await
}
