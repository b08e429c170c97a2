//! Per-file diagnostics surfaced alongside findings.
//!
//! Neither condition aborts the run: a file that cannot be read is skipped,
//! and a file that cannot be parsed still gets its lexical findings.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file could not be loaded; it is skipped entirely.
    #[error("{file}: cannot read file: {message}")]
    Read { file: String, message: String },

    /// The source is not syntactically valid; structural checks were skipped
    /// for this file, lexical findings still apply.
    #[error("{file}: structural analysis skipped due to parse error: {message}")]
    Parse { file: String, message: String },
}
