use camino::Utf8PathBuf;
use thiserror::Error;

/// The manifest could not be turned into a tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Encoding {
        path: Utf8PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("malformed XML at line {line}: {message}")]
    Malformed { line: u32, message: String },
}

/// A structural query expression that cannot be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryExecutionError {
    #[error("query `{expr}` must be an absolute path starting with `/`")]
    NotAbsolute { expr: String },

    #[error("query `{expr}` has an empty segment at position {position}")]
    EmptySegment { expr: String, position: usize },

    #[error("query `{expr}` has unsupported segment `{segment}` (only plain tag names are allowed)")]
    UnsupportedSegment { expr: String, segment: String },
}
