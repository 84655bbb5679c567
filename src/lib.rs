#![no_std]

//! A decoder for binary indoor-trainer workout captures, with Garmin Training
//! Center (TCX) export.
//!
//! Trainer consoles write a fixed-layout log of 48-byte sensor records, sampled
//! irregularly (roughly 1.8 records per second) and interleaved with metadata
//! and a plaintext footer. Sprocket recovers per-record timing from the
//! embedded millisecond clock, drops corrupt trailing records, tells real
//! cadence and heart-rate sensors apart from the console's idle placeholders,
//! and resamples everything onto a one-point-per-second [`Workout`].
//!
//! ```
//! let workout = sprocket::decode_slice(&bytes)?;
//! let document = sprocket::serialize(&workout, start);
//! ```
//!
//! Most users need only [`decode_slice`] and [`serialize`]. The building blocks
//! they are made of live in the [`sans`] module, for applications needing finer
//! control (such as streaming records as they arrive).
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod sans;
pub mod tcx;
pub mod workout;

#[cfg(feature = "std")]
pub use avec::decode_reader;
pub use avec::{DecodeOptions, decode_slice, decode_slice_with};
pub use tcx::serialize;
pub use workout::{SummaryStats, Trackpoint, Workout};
