//! Error types returned by the library.

use thiserror::Error;

/// Errors raised while resolving or applying a rotation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RotateError {
    /// Neither a (non-zero) position nor a (non-empty) reference was supplied.
    #[error("either a position or a reference sequence must be specified")]
    InvalidRequest,

    /// Exact, reverse-complement and fuzzy search all failed.
    #[error("no match for the reference within edit distance {max_dist}")]
    NoMatchFound { max_dist: usize },

    /// A reference was supplied without a maximum edit distance.
    #[error("a maximum edit distance must be specified together with a reference")]
    MissingConfiguration,

    /// The reference FASTA holds no records.
    #[error("reference file contains no sequences")]
    EmptyReference,
}

/// Errors raised while reading or writing FASTA text.
#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sequence data found before the first `>` header.
    #[error("line {line}: sequence data before the first header")]
    OrphanSequence { line: usize },

    #[error("line width must be greater than zero")]
    InvalidLineWidth,
}
