//! Building blocks for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoding, for example feeding records into the aggregator as a capture is
//! still being written. See [`crate::avec`] for implementations covering the
//! common case of decoding a complete capture.
//!
//! # Architecture
//!
//! A capture is a short header followed by a region of fixed-size slots. Only
//! slots carrying the record signature hold sensor data; the rest (header
//! remainder, metadata, footer text) are skipped without interpretation.
//!
//! Decoding runs in four stages, each represented by one type:
//!
//! - [`header::DocumentHeader`] validates the buffer length, reads the athlete
//!   name, and hands out the record [`header::Slots`].
//!
//! - [`layout::Slot`] maps the fixed byte offsets of one slot onto named
//!   fields, producing a [`layout::RawRecord`] when the signature matches.
//!
//! - [`gate::TimestampGate`] rejects records whose clock jumps implausibly far
//!   ahead of the previous accepted record, and tracks the last valid time.
//!
//! - [`bucket::Buckets`] folds accepted records into one bucket per elapsed
//!   second, and [`bucket::SensorTally`] counts readings that differ from the
//!   console's idle defaults.
//!
//! Elapsed time always comes from the embedded clock. Slot position carries no
//! timing information: sampling is irregular, and non-record slots are
//! interleaved with records.

pub mod bucket;
pub mod gate;
pub mod header;
pub mod layout;

/// Entrypoint to the decoding stages.
pub type Decoder = header::DocumentHeader;
