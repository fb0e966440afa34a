use anyhow::{anyhow, Result};
use callboard_client::config::LoggingConfig;
use twyg::{LogLevel, OptsBuilder, Output};

/// Installs the global logger from the `[logging]` config section.
///
/// Records go to stderr; stdout carries command output such as rendered
/// HTML and tally JSON.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let opts = OptsBuilder::new()
        .output(Output::Stderr)
        .coloured(logging.coloured)
        .level(parse_level(&logging.level)?)
        .build()
        .map_err(|e| anyhow!("Invalid logging options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow!("Could not set up logger: {e:?}"))?;
    Ok(())
}

fn parse_level(level: &str) -> Result<LogLevel> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => Err(anyhow!(
            "Unknown log level: {other}\n\nValid levels: trace, debug, info, warn, error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert!(matches!(parse_level("INFO"), Ok(LogLevel::Info)));
        assert!(matches!(parse_level("warning"), Ok(LogLevel::Warn)));
        assert!(parse_level("loud").is_err());
    }
}
