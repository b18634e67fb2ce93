//! Rotation of circular sequences.
//!
//! A rotation request is either a 1-based start position or a reference sequence.
//! References are resolved in three steps, the first hit wins:
//!
//! 1. leftmost exact occurrence of the reference;
//! 2. leftmost exact occurrence of its reverse complement;
//! 3. closest window by edit distance, accepted only within `max_dist`.
//!
//! Offsets are byte offsets into the sequence; for nucleotide text they are the same
//! as character offsets.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::RotateError;
use crate::matcher::closest_match_within;
use crate::reverse_complement_str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationRequest {
    /// Start the sequence at this 1-based position.
    Position(NonZeroUsize),
    /// Start the sequence where the reference is found.
    Reference { reference: String, max_dist: usize },
}

impl RotationRequest {
    /// Build a request from optional parts. A position wins over a reference when
    /// both are given; `0` counts as no position and an empty string as no reference.
    pub fn from_parts(
        position: Option<usize>,
        reference: Option<&str>,
        max_dist: Option<usize>,
    ) -> Result<Self, RotateError> {
        if let Some(pos) = position.and_then(NonZeroUsize::new) {
            return Ok(RotationRequest::Position(pos));
        }
        match reference.filter(|r| !r.is_empty()) {
            Some(reference) => {
                let max_dist = max_dist.ok_or(RotateError::MissingConfiguration)?;
                Ok(RotationRequest::Reference {
                    reference: reference.to_string(),
                    max_dist,
                })
            }
            None => Err(RotateError::InvalidRequest),
        }
    }
}

/// What determined the rotation offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Position,
    Exact,
    ReverseComplement,
    Fuzzy { distance: usize },
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Position => write!(f, "position"),
            Anchor::Exact => write!(f, "exact match"),
            Anchor::ReverseComplement => write!(f, "reverse-complement match"),
            Anchor::Fuzzy { distance } => write!(f, "fuzzy match (distance {})", distance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub sequence: String,
    pub offset: usize,
    pub anchor: Anchor,
}

/// `seq[offset..] + seq[..offset]`.
///
/// An offset at or past the end, or one that falls inside a multi-byte character,
/// returns the sequence unchanged.
pub fn rotate_by(seq: &str, offset: usize) -> String {
    if offset >= seq.len() || !seq.is_char_boundary(offset) {
        return seq.to_string();
    }
    let mut rotated = String::with_capacity(seq.len());
    rotated.push_str(&seq[offset..]);
    rotated.push_str(&seq[..offset]);
    rotated
}

/// Rotate `seq` according to `request`.
pub fn rotate(seq: &str, request: &RotationRequest) -> Result<Rotation, RotateError> {
    let (offset, anchor) = match request {
        RotationRequest::Position(pos) => (position_offset(seq, pos.get()), Anchor::Position),
        RotationRequest::Reference { reference, max_dist } => {
            if reference.is_empty() {
                return Err(RotateError::InvalidRequest);
            }
            locate_reference(seq, reference, *max_dist)?
        }
    };

    Ok(Rotation {
        sequence: rotate_by(seq, offset),
        offset,
        anchor,
    })
}

/// Rotate with optional arguments; see [`RotationRequest::from_parts`].
pub fn shift_sequence(
    seq: &str,
    position: Option<usize>,
    reference: Option<&str>,
    max_dist: Option<usize>,
) -> Result<String, RotateError> {
    let request = RotationRequest::from_parts(position, reference, max_dist)?;
    rotate(seq, &request).map(|r| r.sequence)
}

// Byte offset of the 1-based character position `pos`, or `seq.len()` when the
// position lies past the end.
fn position_offset(seq: &str, pos: usize) -> usize {
    seq.char_indices()
        .nth(pos - 1)
        .map_or(seq.len(), |(idx, _)| idx)
}

fn locate_reference(seq: &str, reference: &str, max_dist: usize) -> Result<(usize, Anchor), RotateError> {
    if let Some(offset) = seq.find(reference) {
        return Ok((offset, Anchor::Exact));
    }

    let reference_rc = reverse_complement_str(reference);
    if let Some(offset) = seq.find(reference_rc.as_str()) {
        return Ok((offset, Anchor::ReverseComplement));
    }

    if seq.is_ascii() && reference.is_ascii() {
        return closest_match_within(seq.as_bytes(), reference.as_bytes(), max_dist)
            .map(|m| (m.offset, Anchor::Fuzzy { distance: m.distance }))
            .ok_or(RotateError::NoMatchFound { max_dist });
    }

    let seq_chars: Vec<char> = seq.chars().collect();
    let reference_chars: Vec<char> = reference.chars().collect();
    let m = closest_match_within(&seq_chars, &reference_chars, max_dist)
        .ok_or(RotateError::NoMatchFound { max_dist })?;
    Ok((position_offset(seq, m.offset + 1), Anchor::Fuzzy { distance: m.distance }))
}
