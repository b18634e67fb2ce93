//! Run configuration resolved from the command line.

use std::path::{Path, PathBuf};

use crate::error::RotateError;
use crate::fasta::{Layout, DEFAULT_LINE_WIDTH};
use crate::matcher::DEFAULT_MAX_DIST;
use crate::rotate::RotationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub reference: Option<PathBuf>,
    pub position: Option<usize>,
    pub max_dist: Option<usize>,
    /// `None` or `-` writes to stdout.
    pub output: Option<PathBuf>,
    pub line_width: Option<usize>,
    pub threads: usize,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        RunConfig {
            input: input.into(),
            reference: None,
            position: None,
            max_dist: None,
            output: None,
            line_width: None,
            threads: 1,
        }
    }

    /// Output file, or `None` for stdout.
    pub fn output_file(&self) -> Option<&Path> {
        self.output.as_deref().filter(|p| p.as_os_str() != "-")
    }

    /// Stdout output is wrapped at 60 columns, file output is one line per sequence,
    /// unless a line width was given explicitly.
    pub fn layout(&self) -> Layout {
        match (self.line_width, self.output_file()) {
            (Some(width), _) => Layout::Wrapped(width),
            (None, None) => Layout::Wrapped(DEFAULT_LINE_WIDTH),
            (None, Some(_)) => Layout::Unwrapped,
        }
    }

    /// Stdout output requires an explicit maximum distance; file output falls back to
    /// [`DEFAULT_MAX_DIST`].
    pub fn max_dist(&self) -> Option<usize> {
        match self.output_file() {
            Some(_) => Some(self.max_dist.unwrap_or(DEFAULT_MAX_DIST)),
            None => self.max_dist,
        }
    }

    /// Check the combination of options before any input is read.
    pub fn validate(&self) -> Result<(), RotateError> {
        if self.reference.is_some() {
            return match self.max_dist() {
                Some(_) => Ok(()),
                None => Err(RotateError::MissingConfiguration),
            };
        }
        match self.position {
            Some(pos) if pos > 0 => Ok(()),
            _ => Err(RotateError::InvalidRequest),
        }
    }

    /// Build the rotation request. A reference file takes precedence over a position;
    /// `reference_seq` is the first record of that file.
    pub fn request(&self, reference_seq: Option<&str>) -> Result<RotationRequest, RotateError> {
        if self.reference.is_some() {
            let reference_seq = reference_seq
                .filter(|r| !r.is_empty())
                .ok_or(RotateError::EmptyReference)?;
            return RotationRequest::from_parts(None, Some(reference_seq), self.max_dist());
        }
        RotationRequest::from_parts(self.position, None, None)
    }
}
