use crate::config::AppConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;
use utilkit::fatal::FATAL_LOG_TARGET;

/// Maps a configured level name to a filter; unknown names mean `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Whether a record should reach a stderr sink. Fatal records are printed to
/// stderr by the fatal guard itself.
fn keep_on_stderr(metadata: &log::Metadata) -> bool {
    metadata.target() != FATAL_LOG_TARGET
}

/// Installs the global logger.
///
/// Records go to the configured log file when it can be opened, otherwise to
/// stderr, so stdout stays reserved for command output. `level_override`
/// (from `--log-level`) wins over the configured level.
pub fn setup_logger(config: &AppConfig, level_override: Option<&str>) -> Result<(), log::SetLoggerError> {
    let level_name = level_override.unwrap_or(config.logging().level());
    let log_level = parse_level(level_name);

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    match config.logging().file() {
        Some(file_path) => match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => base_config.chain(file).apply()?,
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Continuing with logging to stderr.");
                base_config
                    .filter(keep_on_stderr)
                    .chain(std::io::stderr())
                    .apply()?;
            }
        },
        None => base_config
            .filter(keep_on_stderr)
            .chain(std::io::stderr())
            .apply()?,
    }

    log::debug!("Logger initialized with level: {level_name}");
    Ok(())
}
