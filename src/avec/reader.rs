//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use crate::workout::Workout;

use super::{DecodeOptions, slice};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bytes read are not a valid capture.
    #[error(transparent)]
    Decode(#[from] slice::Error),
}

/// Decode a capture from a reader, using the default options.
///
/// The capture has no length prefix, so the reader is drained to its end.
///
/// This method is also re-exported as `sprocket::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read) -> Result<Workout, Error> {
    decode_with(r, &DecodeOptions::default())
}

/// Decode a capture from a reader.
///
/// _Requires Cargo feature `std`._
pub fn decode_with(r: &mut impl Read, options: &DecodeOptions) -> Result<Workout, Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    Ok(slice::decode_with(&buf, options)?)
}
