//! Slice-based decoder implementation.

use either::Either::{Left, Right};
use log::{debug, warn};
use thiserror::Error;

use crate::{
    sans::{
        Decoder,
        bucket::{Buckets, SensorTally},
        gate::{Discarded, TimestampGate},
        header::DocumentHeaderError,
    },
    workout::Workout,
};

use super::DecodeOptions;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Buffer cannot hold a header and a single record.
    #[error("Not a workout capture: {len} bytes is too short (at least {required} required).")]
    Format { len: usize, required: usize },
    /// No slot passed signature and timestamp validation.
    #[error("No workout data found: the file may be truncated, corrupt, or of another format.")]
    NoData,
}

impl From<DocumentHeaderError> for Error {
    fn from(err: DocumentHeaderError) -> Self {
        match err {
            DocumentHeaderError::TooShort { len, required } => Self::Format { len, required },
        }
    }
}

/// Decode a capture held in a slice, using the default options.
///
/// This method is also re-exported as `sprocket::decode_slice`.
pub fn decode(r: &[u8]) -> Result<Workout, Error> {
    decode_with(r, &DecodeOptions::default())
}

/// Decode a capture held in a slice.
///
/// This method is also re-exported as `sprocket::decode_slice_with`.
pub fn decode_with(r: &[u8], options: &DecodeOptions) -> Result<Workout, Error> {
    let (athlete, slots) = Decoder::advance(r)?;
    let trailing = slots.remainder();

    let mut gate = TimestampGate::new(options.max_gap_ms);
    let mut tally = SensorTally::new(options.idle_cadence, options.idle_heart_rate);
    let mut buckets = Buckets::default();
    let mut skipped = 0usize;

    for slot in slots {
        let Some(record) = slot.record() else {
            skipped += 1;
            continue;
        };

        match gate.advance(record) {
            Left(record) => {
                tally.add(&record);
                buckets.add(&record);
            }
            Right(Discarded { record, gap_ms }) => {
                warn!(
                    "Discarding record at {} ms ({} ms after the previous record).",
                    record.timestamp_ms, gap_ms
                );
            }
        }
    }

    let Some(last_ms) = gate.last() else {
        return Err(Error::NoData);
    };

    let sensors = tally.classify(options.presence_threshold);

    debug!(
        "Decoded {} records into {} seconds ({} slots skipped, {} trailing bytes; cadence: {}, heart rate: {}).",
        gate.accepted(),
        buckets.len(),
        skipped,
        trailing,
        sensors.cadence,
        sensors.heart_rate,
    );

    Ok(Workout::assemble(
        athlete,
        &buckets,
        sensors,
        last_ms,
        gate.accepted(),
    ))
}
