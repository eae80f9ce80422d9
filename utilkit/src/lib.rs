//! # utilkit
//!
//! A loose collection of standalone helpers. None of the modules share state;
//! they are grouped in one crate because they tend to be needed together in
//! small services and command-line tools.
//!
//! ## Modules
//!
//! - [`stack`] - Caller location capture and call stack printing
//! - [`env`] - Environment variable lookup with defaults and validation
//! - [`id`] - Random 36-character identifiers in UUID-like layout
//! - [`kv`] - Splitting `key<sep>value` strings
//! - [`text`] - Reading text files with Windows-1252 / ISO-8859-1 decoding
//! - [`db`] - PostgreSQL connection strings assembled from INI files
//! - [`fatal`] - Process-terminating guard for unrecoverable conditions
//! - [`report`] - Logging collaborator injected into the components above
//! - [`error`] - Crate-wide error type

pub mod db;
pub mod env;
pub mod error;
pub mod fatal;
pub mod id;
pub mod kv;
pub mod report;
pub mod stack;
pub mod text;

pub use db::{ConnectionConfig, ConnectionStringBuilder, DbConfigError, build_connection_string};
pub use env::{EnvVarError, get_env_or_default, optional_env, require_env};
pub use error::{Result, UtilkitError};
pub use id::generate_uuid;
pub use kv::{SplitError, split_key_value};
pub use report::{LogReporter, Reporter};
pub use stack::{CallFrame, capture_caller, print_call_stack};
pub use text::{Encoding, TextFileDecoder, TextFileError, read_file_as_text};
