use anyhow::Result;
use callboard_client::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  site_url: {}", config.site_url.as_deref().unwrap_or("<not set>"));
    println!("  performances_path: {}", config.performances_path);
    println!("  lineups_path: {}", config.lineups_path);
    println!("  submit_path: {}", config.submit_path);
    println!("  form_name: {}", config.form_name);
    println!("  logging.level: {}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);

    println!("\nResolved:");
    match config.performances_source() {
        Ok(source) => println!("  performances: {source}"),
        Err(e) => println!("  performances: <invalid: {e}>"),
    }
    match config.lineups_source() {
        Ok(source) => println!("  lineups: {source}"),
        Err(e) => println!("  lineups: <invalid: {e}>"),
    }
    match config.submit_url() {
        Ok(url) => println!("  submit: {url}"),
        Err(_) => println!("  submit: <set site_url to enable submission>"),
    }

    println!("\nPriority: CLI args > ENV vars (CALLBOARD_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure callboard.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
