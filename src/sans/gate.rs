//! Corrupt record filtering.

use either::Either::{self, Left, Right};

use super::layout::RawRecord;

/// Largest plausible gap between consecutive records, in milliseconds.
pub const MAX_GAP_MS: u32 = 5000;

/// A record rejected by the [`TimestampGate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discarded {
    /// The rejected record.
    pub record: RawRecord,
    /// Milliseconds between the previous accepted record and this one.
    pub gap_ms: u32,
}

/// Filters records whose clock jumps implausibly far ahead.
///
/// Captures often end with records whose timestamp has wrapped or jumped by
/// around a billion milliseconds. A record is discarded when it lies more than
/// the maximum gap after the previous *accepted* record, so one corrupt record
/// never shifts the reference point for the next.
#[derive(Debug, Clone)]
pub struct TimestampGate {
    max_gap_ms: u32,
    previous: Option<u32>,
    accepted: usize,
}

impl Default for TimestampGate {
    fn default() -> Self {
        Self::new(MAX_GAP_MS)
    }
}

impl TimestampGate {
    pub fn new(max_gap_ms: u32) -> Self {
        Self {
            max_gap_ms,
            previous: None,
            accepted: 0,
        }
    }

    /// Pass a record through the gate.
    ///
    /// Returns the record on the left if accepted, or on the right if
    /// discarded.
    pub fn advance(&mut self, record: RawRecord) -> Either<RawRecord, Discarded> {
        let t = record.timestamp_ms;

        if let Some(previous) = self.previous {
            // Backward steps are accepted as is; only forward jumps are corrupt.
            let gap_ms = t.saturating_sub(previous);

            if gap_ms > self.max_gap_ms {
                return Right(Discarded { record, gap_ms });
            }
        }

        self.previous = Some(t);
        self.accepted += 1;

        Left(record)
    }

    /// Timestamp of the last accepted record.
    pub fn last(&self) -> Option<u32> {
        self.previous
    }

    /// Number of records accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}
