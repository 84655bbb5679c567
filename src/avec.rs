//! Convenience interfaces for decoding complete captures.
//!
//! The functions in this module take a whole capture, from a slice or a
//! reader, and return a [`Workout`](crate::Workout). Their thresholds can be
//! tuned through [`DecodeOptions`].

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::{decode as decode_slice, decode_with as decode_slice_with};

use crate::sans::{
    bucket::{IDLE_CADENCE, IDLE_HEART_RATE, PRESENCE_THRESHOLD},
    gate::MAX_GAP_MS,
};

/// Tunable constants of the decoder.
///
/// The defaults match the consoles seen in the wild. Override them when a
/// firmware writes different idle values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// Cadence written when no cadence sensor is paired.
    pub idle_cadence: u8,
    /// Heart rate written when no heart-rate strap is paired.
    pub idle_heart_rate: u8,
    /// Share of records (0 to 1) that must carry a real reading for a sensor to
    /// count as connected. The comparison is strict.
    pub presence_threshold: f64,
    /// Largest accepted gap between consecutive records, in milliseconds.
    pub max_gap_ms: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            idle_cadence: IDLE_CADENCE,
            idle_heart_rate: IDLE_HEART_RATE,
            presence_threshold: PRESENCE_THRESHOLD,
            max_gap_ms: MAX_GAP_MS,
        }
    }
}
