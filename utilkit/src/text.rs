//! Reading text files, optionally decoding a legacy single-byte encoding.
//!
//! Two code pages are supported: Windows-1252 and ISO-8859-1 (Latin-1). Both
//! map every byte to exactly one Unicode scalar, so decoding cannot fail.

use crate::report::{LogReporter, Reporter};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names (compared case-insensitively) that select Windows-1252.
pub const WINDOWS_1252_NAMES: [&str; 4] = ["win1252", "cp1252", "windows-1252", "windows1252"];

/// Windows-1252 code points for bytes 0x80..=0x9F. Bytes the code page leaves
/// undefined (0x81, 0x8D, 0x8F, 0x90, 0x9D) map to the C1 control of the same
/// value. Every other byte is identical to ISO-8859-1.
const WINDOWS_1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

#[derive(Debug, Error)]
pub enum TextFileError {
    #[error("Cannot open file '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "File '{}' is not valid UTF-8. Pass an encoding name (e.g. cp1252 or latin1) to decode it.",
        .path.display()
    )]
    InvalidUtf8 { path: PathBuf },
}

/// Encoding applied to the raw bytes of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Bytes are already UTF-8 and returned unchanged.
    Raw,
    Windows1252,
    /// ISO-8859-1; also the fallback for unrecognized names.
    Latin1,
}

impl Encoding {
    /// Resolves an encoding name.
    ///
    /// Empty selects [`Encoding::Raw`], one of [`WINDOWS_1252_NAMES`] selects
    /// [`Encoding::Windows1252`], anything else [`Encoding::Latin1`].
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            Encoding::Raw
        } else if WINDOWS_1252_NAMES
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
        {
            Encoding::Windows1252
        } else {
            Encoding::Latin1
        }
    }

    /// Decodes a single byte. Not meaningful for [`Encoding::Raw`], where it
    /// behaves like Latin-1.
    pub fn decode_byte(self, byte: u8) -> char {
        match (self, byte) {
            (Encoding::Windows1252, 0x80..=0x9F) => WINDOWS_1252_HIGH[usize::from(byte - 0x80)],
            _ => char::from(byte),
        }
    }

    /// Decodes a whole buffer with a single-byte table.
    pub fn decode(self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.decode_byte(b)).collect()
    }
}

/// Reads files and converts them to `String` according to an [`Encoding`].
#[derive(Debug, Clone, Default)]
pub struct TextFileDecoder<R = LogReporter> {
    reporter: R,
}

impl TextFileDecoder {
    /// Creates a decoder that traces through the `log` facade.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Reporter> TextFileDecoder<R> {
    /// Creates a decoder that traces through `reporter`.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Receives one `trace` record per [`read`](Self::read);
    ///   a reference such as `&MemoryReporter` works as well
    pub fn with_reporter(reporter: R) -> Self {
        Self { reporter }
    }

    /// Reads `path` and decodes it using `encoding_name` (see
    /// [`Encoding::from_name`]).
    ///
    /// # Errors
    ///
    /// Same as [`read_file_as_text`].
    pub fn read(&self, path: impl AsRef<Path>, encoding_name: &str) -> Result<String, TextFileError> {
        let path = path.as_ref();
        self.reporter.trace(format_args!(
            "read_file_as_text({}, {encoding_name})",
            path.display()
        ));

        let bytes = read_bytes(path)?;

        match Encoding::from_name(encoding_name) {
            Encoding::Raw => String::from_utf8(bytes).map_err(|_| TextFileError::InvalidUtf8 {
                path: path.to_path_buf(),
            }),
            encoding => Ok(encoding.decode(&bytes)),
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, TextFileError> {
    let mut file = File::open(path).map_err(|source| TextFileError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| TextFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}

/// Reads `path` as text, decoding it from `encoding_name` when non-empty.
///
/// # Arguments
///
/// * `path` - File to read; the whole file is loaded into memory
/// * `encoding_name` - Empty for UTF-8 input returned unchanged, one of
///   [`WINDOWS_1252_NAMES`] (any case) for Windows-1252, anything else for
///   ISO-8859-1
///
/// # Returns
///
/// The decoded text. The single-byte decodings never fail.
///
/// # Errors
///
/// - [`TextFileError::Access`] if the file cannot be opened
/// - [`TextFileError::Read`] if opening succeeds but reading does not, for
///   example on a directory
/// - [`TextFileError::InvalidUtf8`] if `encoding_name` is empty and the
///   content is not UTF-8
///
/// # Examples
///
/// ```no_run
/// use utilkit::read_file_as_text;
///
/// let notes = read_file_as_text("legacy/notes.txt", "cp1252")?;
/// println!("{notes}");
/// # Ok::<(), utilkit::TextFileError>(())
/// ```
pub fn read_file_as_text(path: impl AsRef<Path>, encoding_name: &str) -> Result<String, TextFileError> {
    TextFileDecoder::new().read(path, encoding_name)
}
