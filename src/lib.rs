pub mod config;
pub mod error;
pub mod fasta;
pub mod io;
pub mod matcher;
pub mod pipeline;
pub mod rotate;

pub use config::RunConfig;
pub use error::{FastaError, RotateError};
pub use fasta::FastaRecord;
pub use matcher::{edit_distance, find_closest_match, DEFAULT_MAX_DIST};
pub use rotate::{rotate, rotate_by, shift_sequence, Anchor, Rotation, RotationRequest};

/// Reverse complement of a DNA sequence.
///
/// - A ↔ T, G ↔ C, case preserved
/// - any other byte is kept as is (its position is still reversed)
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_base(b)).collect()
}

/// `reverse_complement` for `&str` input. Non-ASCII characters pass through unchanged.
pub fn reverse_complement_str(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| if c.is_ascii() { complement_base(c as u8) as char } else { c })
        .collect()
}

fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        _ => base,
    }
}
