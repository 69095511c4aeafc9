//! Partitioning errors for pway-partition

use thiserror::Error;

/// Errors from edge sources and partitioning routines.
///
/// Every failure aborts the run as a whole; no partially filled
/// [`PartitionTable`](crate::partitioning::table::PartitionTable) is ever
/// handed back alongside one of these.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// Edge input is not a whole number of records.
    ///
    /// `truncated_at` is `None` when the length check fails up front, or the
    /// byte offset of the partial record when the stream ends mid-record.
    #[error(
        "Malformed edge input: {len} bytes is not a multiple of the {record_size}-byte record \
         size{}",
        truncation_note(.truncated_at)
    )]
    MalformedInput {
        len: u64,
        record_size: usize,
        truncated_at: Option<u64>,
    },
    /// Rejected before any edge is processed (e.g. zero partitions).
    #[error("Invalid partitioner configuration: {0}")]
    InvalidConfiguration(String),
    /// A rewound source did not replay the sequence of the first pass.
    #[error("Edge source changed between passes: {0}")]
    InconsistentRewind(String),
    /// A finished table broke mastership or coverage rules.
    #[error("Partition table invariant violated: {0}")]
    InvariantViolation(String),
    /// Underlying reader failure.
    #[error("I/O error while reading edges: {0}")]
    Io(#[from] std::io::Error),
}

fn truncation_note(truncated_at: &Option<u64>) -> String {
    match truncated_at {
        Some(offset) => format!(" (partial record at byte offset {offset})"),
        None => String::new(),
    }
}
