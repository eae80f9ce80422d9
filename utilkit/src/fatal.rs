//! Process-terminating guard for conditions a program cannot recover from,
//! typically during startup.
//!
//! Unlike everything else in this crate, these functions do not return an
//! error: they print a colored, timestamped diagnostic with the caller's
//! location to stderr, log it, and exit with [`FATAL_EXIT_CODE`].
//!
//! ```no_run
//! use utilkit::die_on_error;
//!
//! let text = die_on_error!(std::fs::read_to_string("app.toml"), "cannot read {}", "app.toml");
//! ```

use chrono::{DateTime, Local};
use colored::Colorize;
use std::fmt;
use std::panic::Location;
use std::process;

pub const FATAL_EXIT_CODE: i32 = 1;

/// `log` target of the record [`die`] emits. Loggers that already write to
/// stderr can drop it, since the same message is printed there directly.
pub const FATAL_LOG_TARGET: &str = "utilkit::fatal";

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Returns the `Ok` value, or exits the process describing the error.
///
/// The reported location is the caller's (or the [`die_on_error!`] call
/// site's).
#[track_caller]
pub fn die_on_error<T, E: fmt::Display>(result: Result<T, E>, message: fmt::Arguments<'_>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => die(format_args!("{message}: {err}")),
    }
}

/// Exits the process with a fatal diagnostic.
#[track_caller]
pub fn die(message: fmt::Arguments<'_>) -> ! {
    let location = Location::caller();
    let message = message.to_string();

    log::error!(
        target: FATAL_LOG_TARGET,
        "{message} (at {}:{})",
        location.file(),
        location.line()
    );
    eprintln!("{}", format_fatal(&Local::now(), location, &message));

    process::exit(FATAL_EXIT_CODE)
}

/// Renders the line printed by [`die`]:
/// `2024/01/31 12:00:00.123 FATAL [src/main.rs:10] message`.
pub fn format_fatal(timestamp: &DateTime<Local>, location: &Location<'_>, message: &str) -> String {
    format!(
        "{} {} {} {}",
        timestamp.format(TIMESTAMP_FORMAT).to_string().dimmed(),
        "FATAL".red().bold(),
        format!("[{}:{}]", location.file(), location.line()).cyan(),
        message.red()
    )
}

/// Formats the message and calls [`die_on_error`](crate::fatal::die_on_error)
/// so the reported location is the macro call site.
#[macro_export]
macro_rules! die_on_error {
    ($result:expr, $($arg:tt)+) => {
        $crate::fatal::die_on_error($result, ::std::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ok_value_passes_through() {
        let value = die_on_error(Ok::<_, String>(42), format_args!("unused"));
        assert_eq!(value, 42);
    }

    #[test]
    fn test_macro_passes_ok_value_through() {
        let value = crate::die_on_error!(Ok::<_, std::io::Error>("ready"), "step {}", 1);
        assert_eq!(value, "ready");
    }

    #[test]
    fn test_format_contains_timestamp_location_and_message() {
        let timestamp = Local.with_ymd_and_hms(2024, 1, 31, 12, 0, 5).unwrap();
        let location = Location::caller();

        let line = format_fatal(&timestamp, location, "database unreachable");

        assert!(line.contains("2024/01/31 12:00:05.000"), "{line}");
        assert!(line.contains("FATAL"));
        assert!(line.contains(&format!("{}:{}", location.file(), location.line())));
        assert!(line.contains("database unreachable"));
    }
}
