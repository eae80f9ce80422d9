use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ukit", version, about = "Small standalone helpers from the command line")]
pub struct Cli {
    /// Configuration file (TOML). Defaults to the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override: trace, debug, info, warn, error or off.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print random 36-character identifiers
    Uuid {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Print an environment variable, or a default when it is unset
    Env {
        key: String,
        #[arg(short, long, default_value = "")]
        default: String,
        /// Fail unless the variable is set and not blank; prints it trimmed
        #[arg(long, conflicts_with = "default")]
        required: bool,
    },
    /// Split INPUT at the first occurrence of SEPARATOR
    Split { input: String, separator: String },
    /// Print a text file, decoding cp1252 / latin1 when --encoding is given
    Cat {
        path: PathBuf,
        #[arg(short, long, default_value = "")]
        encoding: String,
    },
    /// Print the PostgreSQL connection string for a database
    Dsn {
        database: String,
        /// Directory holding `<database>.ini`; overrides the configuration
        #[arg(long)]
        config_root: Option<PathBuf>,
    },
    /// Print the current call stack
    Stack,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_dsn_with_global_flags() {
        let cli = Cli::try_parse_from([
            "ukit",
            "dsn",
            "mydb",
            "--config-root",
            "/tmp/ini",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Dsn {
                database,
                config_root,
            } => {
                assert_eq!(database, "mydb");
                assert_eq!(config_root, Some(PathBuf::from("/tmp/ini")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_env_required_conflicts_with_default() {
        let cli = Cli::try_parse_from(["ukit", "env", "HOME", "--required"]).unwrap();
        assert!(matches!(cli.command, Command::Env { required: true, .. }));

        assert!(Cli::try_parse_from(["ukit", "env", "HOME", "--required", "-d", "x"]).is_err());
    }

    #[test]
    fn test_uuid_count_defaults_to_one() {
        let cli = Cli::try_parse_from(["ukit", "uuid"]).unwrap();
        assert!(matches!(cli.command, Command::Uuid { count: 1 }));
    }
}
