use crate::cli::Command;
use crate::config::AppConfig;
use std::io::Write;
use std::path::PathBuf;
use utilkit::{
    ConnectionStringBuilder, generate_uuid, get_env_or_default, read_file_as_text, require_env,
    split_key_value, stack,
};

/// Runs one subcommand, writing its result to `out`.
pub fn run<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> utilkit::Result<()> {
    match command {
        Command::Uuid { count } => {
            for _ in 0..*count {
                writeln!(out, "{}", generate_uuid())?;
            }
        }
        Command::Env {
            key,
            default,
            required,
        } => {
            let value = if *required {
                require_env(key)?
            } else {
                get_env_or_default(key, default)
            };
            writeln!(out, "{value}")?;
        }
        Command::Split { input, separator } => {
            let (key, value) = split_key_value(input, separator)?;
            writeln!(out, "key: {key}")?;
            writeln!(out, "value: {value}")?;
        }
        Command::Cat { path, encoding } => {
            let text = read_file_as_text(path, encoding)?;
            write!(out, "{text}")?;
        }
        Command::Dsn {
            database,
            config_root,
        } => {
            let root = config_root
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.database().config_root()));
            log::debug!("Reading database configuration from {}", root.display());
            let uri = ConnectionStringBuilder::new(root).build(database)?;
            writeln!(out, "{uri}")?;
        }
        Command::Stack => {
            stack::write_call_stack(out)?;
        }
    }
    Ok(())
}
