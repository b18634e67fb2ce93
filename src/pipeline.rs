//! Per-record processing: rotate every record, keep going past failures, write the
//! successful ones in input order.

use anyhow::Result;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, error};
use std::io::{BufRead, Write};
use std::thread;

use crate::error::RotateError;
use crate::fasta::{read_fasta, FastaRecord, Layout};
use crate::rotate::{rotate, Rotation, RotationRequest};

/// Result of rotating one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub id: String,
    pub result: Result<Rotation, RotateError>,
}

impl RecordOutcome {
    fn new(record: &FastaRecord, request: &RotationRequest) -> Self {
        RecordOutcome {
            id: record.id.clone(),
            result: rotate(&record.sequence, request),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rotated: usize,
    pub failed: usize,
}

/// Rotate every record. Output order matches input order for any thread count.
/// No more workers than records are started.
pub fn rotate_records(records: &[FastaRecord], request: &RotationRequest, threads: usize) -> Vec<RecordOutcome> {
    let threads = threads.min(records.len());
    if threads <= 1 {
        return records.iter().map(|r| RecordOutcome::new(r, request)).collect();
    }

    let (job_tx, job_rx): (Sender<(usize, &FastaRecord)>, Receiver<(usize, &FastaRecord)>) =
        bounded(threads.saturating_mul(4));
    let (result_tx, result_rx): (Sender<(usize, RecordOutcome)>, Receiver<(usize, RecordOutcome)>) = unbounded();

    thread::scope(|scope| {
        for _ in 0..threads {
            let rx = job_rx.clone();
            let tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok((index, record)) = rx.recv() {
                    if tx.send((index, RecordOutcome::new(record, request))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(job_rx);
        drop(result_tx);

        for job in records.iter().enumerate() {
            if job_tx.send(job).is_err() {
                break;
            }
        }
        drop(job_tx);
    });

    let mut outcomes: Vec<(usize, RecordOutcome)> = result_rx.iter().collect();
    outcomes.sort_by_key(|(index, _)| *index);
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

/// Write the rotated records; failures are logged per record and skipped.
pub fn write_outcomes<W: Write>(writer: &mut W, outcomes: &[RecordOutcome], layout: Layout) -> Result<Summary> {
    let mut summary = Summary::default();

    for outcome in outcomes {
        match &outcome.result {
            Ok(rotation) => {
                debug!("{}: rotated by {} ({})", outcome.id, rotation.offset, rotation.anchor);
                let record = FastaRecord::new(outcome.id.as_str(), rotation.sequence.as_str());
                layout.write_record(writer, &record)?;
                summary.rotated += 1;
            }
            Err(e) => {
                error!("Error for {}: {}", outcome.id, e);
                summary.failed += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Read FASTA from `input`, rotate each record and write the results to `output`.
pub fn process<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    request: &RotationRequest,
    layout: Layout,
    threads: usize,
) -> Result<Summary> {
    let records = read_fasta(input)?;
    debug!("read {} records", records.len());
    let outcomes = rotate_records(&records, request, threads);
    write_outcomes(output, &outcomes, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate::Anchor;

    fn records() -> Vec<FastaRecord> {
        (0..50)
            .map(|i| {
                let seq = format!("{}TTACA{}", "G".repeat(i % 7), "C".repeat(i % 5));
                FastaRecord::new(format!("seq{}", i), seq)
            })
            .collect()
    }

    fn request() -> RotationRequest {
        RotationRequest::Reference {
            reference: "TTACA".to_string(),
            max_dist: 0,
        }
    }

    #[test]
    fn test_threads_preserve_order() {
        let records = records();
        let sequential = rotate_records(&records, &request(), 1);
        let parallel = rotate_records(&records, &request(), 4);
        assert_eq!(sequential, parallel);
        for (record, outcome) in records.iter().zip(&parallel) {
            assert_eq!(record.id, outcome.id);
            let rotation = outcome.result.as_ref().unwrap();
            assert!(rotation.sequence.starts_with("TTACA"));
            assert_eq!(rotation.anchor, Anchor::Exact);
        }
    }

    #[test]
    fn test_thread_count_capped_by_records() {
        let records = vec![FastaRecord::new("a", "ABCDEF"), FastaRecord::new("b", "GHIJ")];
        let request = RotationRequest::from_parts(Some(2), None, None).unwrap();
        let outcomes = rotate_records(&records, &request, usize::MAX / 2);
        let rotated: Vec<&str> = outcomes
            .iter()
            .map(|o| o.result.as_ref().unwrap().sequence.as_str())
            .collect();
        assert_eq!(rotated, vec!["BCDEFA", "HIJG"]);
    }

    #[test]
    fn test_failures_are_skipped() {
        let outcomes = vec![
            RecordOutcome {
                id: "bad".to_string(),
                result: Err(RotateError::NoMatchFound { max_dist: 1 }),
            },
            RecordOutcome {
                id: "good".to_string(),
                result: Ok(Rotation {
                    sequence: "ACGT".to_string(),
                    offset: 0,
                    anchor: Anchor::Exact,
                }),
            },
        ];
        let mut out = Vec::new();
        let summary = write_outcomes(&mut out, &outcomes, Layout::Unwrapped).unwrap();
        assert_eq!(summary, Summary { rotated: 1, failed: 1 });
        assert_eq!(String::from_utf8(out).unwrap(), ">good\nACGT\n");
    }
}
