//! Logging collaborator used by the file and configuration helpers.
//!
//! Components take a [`Reporter`] by value instead of calling a global logger
//! directly, so callers can route diagnostics elsewhere (or capture them in
//! tests). [`LogReporter`] is the default and forwards to the `log` facade.

use std::fmt;

/// Target used for every record emitted by [`LogReporter`].
pub const LOG_TARGET: &str = "utilkit";

/// Sink for the diagnostics emitted by utilkit components.
pub trait Reporter {
    fn trace(&self, args: fmt::Arguments<'_>);
    fn info(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn trace(&self, args: fmt::Arguments<'_>) {
        (**self).trace(args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        (**self).info(args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        (**self).error(args)
    }
}

/// Forwards reports to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn trace(&self, args: fmt::Arguments<'_>) {
        log::trace!(target: LOG_TARGET, "{args}");
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        log::info!(target: LOG_TARGET, "{args}");
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        log::error!(target: LOG_TARGET, "{args}");
    }
}

/// Severity attached to a captured report.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Trace,
    Info,
    Error,
}

/// Reporter that keeps every message in memory.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MemoryReporter {
    records: std::cell::RefCell<Vec<(ReportLevel, String)>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(ReportLevel, String)> {
        self.records.borrow().clone()
    }

    /// Messages recorded at `level`, oldest first.
    pub fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    fn push(&self, level: ReportLevel, args: fmt::Arguments<'_>) {
        self.records.borrow_mut().push((level, args.to_string()));
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Reporter for MemoryReporter {
    fn trace(&self, args: fmt::Arguments<'_>) {
        self.push(ReportLevel::Trace, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.push(ReportLevel::Info, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.push(ReportLevel::Error, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_keeps_order_and_level() {
        let reporter = MemoryReporter::new();
        reporter.info(format_args!("first {}", 1));
        reporter.error(format_args!("second"));
        reporter.trace(format_args!("third"));

        assert_eq!(
            reporter.records(),
            vec![
                (ReportLevel::Info, "first 1".to_string()),
                (ReportLevel::Error, "second".to_string()),
                (ReportLevel::Trace, "third".to_string()),
            ]
        );
        assert_eq!(reporter.messages(ReportLevel::Error), vec!["second"]);
    }

    #[test]
    fn test_reference_forwards_to_inner_reporter() {
        let reporter = MemoryReporter::new();
        let by_ref = &reporter;
        by_ref.info(format_args!("through a reference"));

        assert_eq!(
            reporter.messages(ReportLevel::Info),
            vec!["through a reference"]
        );
    }

    #[test]
    fn test_log_reporter_does_not_panic_without_logger() {
        let reporter = LogReporter;
        reporter.trace(format_args!("trace"));
        reporter.info(format_args!("info"));
        reporter.error(format_args!("error"));
    }
}
