//! Call stack introspection.
//!
//! Frames are collected with the `backtrace` crate and resolved to
//! function/file/line. Resolution depends on debug info being present; when it
//! is not, the affected parts of a [`CallFrame`] are `None` or `<unknown>`.
//!
//! Frames of the collection machinery (the `backtrace` crate and this
//! module's own entry points) are dropped before anything is reported, so
//! index 0 is always the function that called into this module. The entry
//! points are never inlined, and inlined collector frames are recognised by
//! source file as well as by symbol, since optimized builds often resolve them
//! to bare names such as `trace`.
//!
//! In optimized builds without debug info a caller that was itself inlined
//! has no frame of its own; the nearest surviving frame is reported instead.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Upper bound on the frames printed by [`print_call_stack`].
pub const MAX_STACK_FRAMES: usize = 10;

const UNKNOWN: &str = "<unknown>";

/// Leading frames that belong to stack collection itself.
const INTERNAL_SYMBOL_PREFIXES: [&str; 7] = [
    "backtrace::",
    "_Unwind_",
    "utilkit::stack::collect_frames",
    "utilkit::stack::capture_caller",
    "utilkit::stack::call_stack",
    "utilkit::stack::write_call_stack",
    "utilkit::stack::print_call_stack",
];

/// Unqualified names of this module's collection functions, matched only for
/// frames whose source is this file.
const ENTRY_POINTS: [&str; 6] = [
    "collect_frames",
    "capture_caller",
    "call_stack",
    "write_call_stack",
    "print_call_stack",
    "{{closure}}",
];

const MODULE_FILE: &str = file!();

/// Directory prefix of the `backtrace` crate sources in the cargo registry.
const BACKTRACE_CRATE_DIR: &str = "backtrace-";

/// Source paths of the Rust standard library as recorded in debug info.
const RUNTIME_PATH_MARKERS: [&str; 4] = [
    "/rustc/",
    "/library/std/",
    "/library/core/",
    "/library/alloc/",
];

/// Symbols of the runtime entry machinery, used when file info is missing.
const RUNTIME_SYMBOL_PREFIXES: [&str; 7] = [
    "std::rt::",
    "std::sys::",
    "std::panicking::",
    "std::panic::",
    "core::ops::function::",
    "__rust_",
    "__libc_start",
];

/// One resolved stack frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    pub function: String,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl CallFrame {
    fn unknown() -> Self {
        Self {
            function: UNKNOWN.to_string(),
            file: None,
            line: None,
        }
    }

    fn from_symbol(symbol: &backtrace::Symbol) -> Self {
        Self {
            // `{:#}` drops the trailing symbol hash.
            function: symbol
                .name()
                .map(|name| format!("{name:#}"))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            file: symbol.filename().map(Path::to_path_buf),
            line: symbol.lineno(),
        }
    }

    /// `file:line`, with `<unknown>` for missing parts.
    pub fn location(&self) -> String {
        let file = self
            .file
            .as_deref()
            .map(|f| f.display().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        match self.line {
            Some(line) => format!("{file}:{line}"),
            None => format!("{file}:?"),
        }
    }

    fn is_internal(&self) -> bool {
        if INTERNAL_SYMBOL_PREFIXES
            .iter()
            .any(|prefix| self.function.starts_with(prefix))
        {
            return true;
        }

        let Some(file) = self.file.as_deref() else {
            return false;
        };
        let in_backtrace_crate = file.components().any(|component| {
            component
                .as_os_str()
                .to_string_lossy()
                .starts_with(BACKTRACE_CRATE_DIR)
        });

        let name = bare_name(&self.function);
        in_backtrace_crate
            || (file.ends_with(MODULE_FILE) && ENTRY_POINTS.iter().any(|entry| *entry == name))
    }

    /// Whether the frame belongs to the standard library / runtime.
    pub fn is_runtime(&self) -> bool {
        let in_runtime_source = self.file.as_deref().is_some_and(|file| {
            let file = file.to_string_lossy();
            RUNTIME_PATH_MARKERS.iter().any(|marker| file.contains(marker))
        });

        in_runtime_source
            || RUNTIME_SYMBOL_PREFIXES
                .iter()
                .any(|prefix| self.function.starts_with(prefix))
    }
}

/// Last path segment of a symbol, without generic arguments or trailing
/// closure segments: `a::b::write_call_stack<W>::{{closure}}` gives
/// `write_call_stack`.
fn bare_name(function: &str) -> &str {
    let mut name = function.split('<').next().unwrap_or_default();
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name.rsplit("::").next().unwrap_or(name)
}

impl fmt::Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.function, self.location())
    }
}

/// Collects up to `limit` frames, innermost first, starting at the caller of
/// this module. Inlined functions appear as their own frames.
#[inline(never)]
fn collect_frames(limit: usize) -> Vec<CallFrame> {
    let mut frames = Vec::new();
    let mut in_prologue = true;

    backtrace::trace(|raw| {
        backtrace::resolve_frame(raw, |symbol| {
            if frames.len() >= limit {
                return;
            }
            let frame = CallFrame::from_symbol(symbol);
            if in_prologue && frame.is_internal() {
                return;
            }
            in_prologue = false;
            frames.push(frame);
        });
        frames.len() < limit
    });

    frames
}

/// Returns the frame `skip_frames` levels above the caller.
///
/// `capture_caller(0)` describes the function that called `capture_caller`,
/// `capture_caller(1)` its caller, and so on. When `skip_frames` is larger than
/// the stack, the outermost frame is returned; when nothing can be resolved at
/// all, a frame with unknown parts is returned.
#[inline(never)]
pub fn capture_caller(skip_frames: usize) -> CallFrame {
    let mut frames = collect_frames(skip_frames.saturating_add(1));
    match frames.pop() {
        Some(frame) => frame,
        None => CallFrame::unknown(),
    }
}

/// Frames from the caller outward, stopping before the first runtime frame
/// and after at most `max_frames`.
#[inline(never)]
pub fn call_stack(max_frames: usize) -> Vec<CallFrame> {
    collect_frames(max_frames)
        .into_iter()
        .take_while(|frame| !frame.is_runtime())
        .collect()
}

/// Writes the caller's stack, one `-level:N | function | file:line` line per
/// frame, at most [`MAX_STACK_FRAMES`] lines.
#[inline(never)]
pub fn write_call_stack<W: Write>(out: &mut W) -> io::Result<()> {
    for (level, frame) in call_stack(MAX_STACK_FRAMES).iter().enumerate() {
        writeln!(out, "-level:{level} | {frame}")?;
    }
    Ok(())
}

/// Prints the caller's stack to stdout. Output errors are ignored.
#[inline(never)]
pub fn print_call_stack() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write_call_stack(&mut out);
}
