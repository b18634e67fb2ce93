//! FASTA reading and writing.
//!
//! Records keep the order in which their identifiers first appear. Two writers are
//! provided: a wrapped one (fixed line width) and an unwrapped one (whole sequence
//! on a single line).

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::FastaError;

pub const DEFAULT_LINE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        FastaRecord {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Parse a multi-record FASTA stream.
///
/// Every line is trimmed first. A header (`>`) starts a record; the other lines are
/// concatenated into its sequence. A repeated identifier restarts that record's
/// sequence but keeps its original position.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records: Vec<FastaRecord> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if let Some(id) = line.strip_prefix('>') {
            let idx = match index_of.get(id) {
                Some(&idx) => {
                    records[idx].sequence.clear();
                    idx
                }
                None => {
                    records.push(FastaRecord::new(id, String::new()));
                    index_of.insert(id.to_string(), records.len() - 1);
                    records.len() - 1
                }
            };
            current = Some(idx);
        } else if !line.is_empty() {
            match current {
                Some(idx) => records[idx].sequence.push_str(line),
                None => return Err(FastaError::OrphanSequence { line: line_no + 1 }),
            }
        }
    }

    Ok(records)
}

/// Read only the first record of a FASTA stream, if any.
pub fn read_first_record<R: BufRead>(reader: R) -> Result<Option<FastaRecord>, FastaError> {
    Ok(read_fasta(reader)?.into_iter().next())
}

/// Format one record with the sequence wrapped at `line_width` characters.
/// Every line, the header included, is newline-terminated.
pub fn format_fasta(id: &str, sequence: &str, line_width: usize) -> Result<String, FastaError> {
    let mut buffer = Vec::with_capacity(id.len() + sequence.len() + sequence.len() / line_width.max(1) + 4);
    write_fasta_wrapped(&mut buffer, id, sequence, line_width)?;
    // Only UTF-8 text goes in; chunks never split inside a character.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write one record with the sequence wrapped at `line_width` characters.
pub fn write_fasta_wrapped<W: Write>(
    writer: &mut W,
    id: &str,
    sequence: &str,
    line_width: usize,
) -> Result<(), FastaError> {
    if line_width == 0 {
        return Err(FastaError::InvalidLineWidth);
    }
    writeln!(writer, ">{}", id)?;

    let mut line = String::with_capacity(line_width);
    let mut count = 0;
    for c in sequence.chars() {
        line.push(c);
        count += 1;
        if count == line_width {
            writeln!(writer, "{}", line)?;
            line.clear();
            count = 0;
        }
    }
    if !line.is_empty() {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Write one record with the whole sequence on a single line.
pub fn write_fasta_unwrapped<W: Write>(writer: &mut W, id: &str, sequence: &str) -> Result<(), FastaError> {
    writeln!(writer, ">{}", id)?;
    writeln!(writer, "{}", sequence)?;
    Ok(())
}

/// How records are laid out when written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Wrapped(usize),
    Unwrapped,
}

impl Layout {
    pub fn write_record<W: Write>(&self, writer: &mut W, record: &FastaRecord) -> Result<(), FastaError> {
        match *self {
            Layout::Wrapped(width) => write_fasta_wrapped(writer, &record.id, &record.sequence, width),
            Layout::Unwrapped => write_fasta_unwrapped(writer, &record.id, &record.sequence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_multi_record() {
        let input = ">seq1\nACGT\n  TTGA  \n>seq2 plasmid\nGGCC\n";
        let records = read_fasta(Cursor::new(input)).unwrap();
        assert_eq!(
            records,
            vec![FastaRecord::new("seq1", "ACGTTTGA"), FastaRecord::new("seq2 plasmid", "GGCC")]
        );
    }

    #[test]
    fn test_read_duplicate_id_keeps_position() {
        let input = ">a\nAAAA\n>b\nCCCC\n>a\nGG\n";
        let records = read_fasta(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], FastaRecord::new("a", "GG"));
        assert_eq!(records[1], FastaRecord::new("b", "CCCC"));
    }

    #[test]
    fn test_read_blank_lines_and_empty_record() {
        let input = "\n>empty\n\n>x\nAC\n\nGT\n";
        let records = read_fasta(Cursor::new(input)).unwrap();
        assert_eq!(records[0], FastaRecord::new("empty", ""));
        assert_eq!(records[1], FastaRecord::new("x", "ACGT"));
    }

    #[test]
    fn test_read_orphan_sequence() {
        let err = read_fasta(Cursor::new("ACGT\n>x\nAC\n")).unwrap_err();
        assert!(matches!(err, FastaError::OrphanSequence { line: 1 }));
    }

    #[test]
    fn test_read_first_record() {
        let first = read_first_record(Cursor::new(">r1\nTTACA\n>r2\nGG\n")).unwrap();
        assert_eq!(first, Some(FastaRecord::new("r1", "TTACA")));
        assert_eq!(read_first_record(Cursor::new("")).unwrap(), None);
    }

    #[test]
    fn test_format_wrapped() {
        assert_eq!(format_fasta("s", "ACGTACGTAC", 4).unwrap(), ">s\nACGT\nACGT\nAC\n");
        assert_eq!(format_fasta("s", "ACGT", 4).unwrap(), ">s\nACGT\n");
        assert_eq!(format_fasta("s", "", 60).unwrap(), ">s\n");
    }

    #[test]
    fn test_format_default_width() {
        let seq = "A".repeat(130);
        let text = format_fasta("long", &seq, DEFAULT_LINE_WIDTH).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(format_fasta("s", "ACGT", 0), Err(FastaError::InvalidLineWidth)));
    }

    #[test]
    fn test_unwrapped() {
        let mut out = Vec::new();
        write_fasta_unwrapped(&mut out, "s", &"C".repeat(100)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!(">s\n{}\n", "C".repeat(100)));
    }
}
