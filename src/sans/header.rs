//! Document header and record region.

use core::{iter::FusedIterator, slice::ChunksExact};

use thiserror::Error;

use super::layout::{MIN_LEN, NAME_LEN, NAME_OFFSET, RECORD_LEN, RECORDS_OFFSET, Slot};

/// An error advancing over a document header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentHeaderError {
    /// Buffer cannot hold a header and a single slot.
    #[error("Capture too short ({len} bytes, expected at least {required}).")]
    TooShort { len: usize, required: usize },
}

/// State token to decode a document header.
#[derive(Debug)]
pub struct DocumentHeader;

impl DocumentHeader {
    /// Transition to the record region by decoding a document header.
    ///
    /// Returns the athlete name, if one was recorded and is valid UTF-8, and
    /// an iterator over the slots of the record region.
    pub fn advance(r: &[u8]) -> Result<(Option<&str>, Slots<'_>), DocumentHeaderError> {
        if r.len() < MIN_LEN {
            Err(DocumentHeaderError::TooShort {
                len: r.len(),
                required: MIN_LEN,
            })?;
        }

        let name = athlete_name(&r[NAME_OFFSET..NAME_OFFSET + NAME_LEN]);
        let slots = Slots(r[RECORDS_OFFSET..].chunks_exact(RECORD_LEN));

        Ok((name, slots))
    }
}

/// Read a null-terminated name field, discarding blank or undecodable names.
fn athlete_name(field: &[u8]) -> Option<&str> {
    let end = field.iter().position(|b| *b == 0).unwrap_or(field.len());

    core::str::from_utf8(&field[..end])
        .ok()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Iterator over the slots of the record region.
///
/// Trailing bytes too short to form a slot are never yielded.
#[derive(Debug, Clone)]
pub struct Slots<'a>(ChunksExact<'a, u8>);

impl Slots<'_> {
    /// Number of bytes after the last whole slot.
    pub fn remainder(&self) -> usize {
        self.0.remainder().len()
    }
}

impl Iterator for Slots<'_> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        self.0.next().and_then(Slot::read)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Slots<'_> {}
impl FusedIterator for Slots<'_> {}
