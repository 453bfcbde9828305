use anyhow::{anyhow, Result};
use cancionero_engine::LoggingConfig;

/// Install the global logger from the `[logging]` config section.
///
/// `quiet` drops to errors only so JSON output stays machine readable.
pub fn init(config: &LoggingConfig, quiet: bool) -> Result<()> {
    let level = if quiet {
        twyg::LogLevel::Error
    } else {
        parse_level(&config.level)?
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(config.coloured)
        .level(level)
        .report_caller(config.report_caller)
        .build()
        .map_err(|e| anyhow!("Invalid logging options: {e}"))?;

    twyg::setup(opts).map_err(|e| anyhow!("Failed to set up logging: {e}"))?;
    Ok(())
}

fn parse_level(level: &str) -> Result<twyg::LogLevel> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(twyg::LogLevel::Trace),
        "debug" => Ok(twyg::LogLevel::Debug),
        "info" => Ok(twyg::LogLevel::Info),
        "warn" | "warning" => Ok(twyg::LogLevel::Warn),
        "error" => Ok(twyg::LogLevel::Error),
        other => Err(anyhow!(
            "Unknown log level {other:?}\n\nValid levels: trace, debug, info, warn, error"
        )),
    }
}
