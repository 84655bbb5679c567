//! Byte layout of a capture.
//!
//! All wire offsets live here. The format is reverse-engineered and carries no
//! checksums, so corrections to a field position should only ever touch this
//! file.

use zerocopy::{
    FromBytes,
    little_endian::{F32, U32},
};

/// Offset of the athlete name field.
pub const NAME_OFFSET: usize = 8;
/// Length of the null-terminated athlete name field.
pub const NAME_LEN: usize = 64;
/// Offset of the first slot in the record region.
pub const RECORDS_OFFSET: usize = NAME_OFFSET + NAME_LEN;
/// Length of a single slot.
pub const RECORD_LEN: usize = 48;
/// Smallest buffer holding a header and one slot.
pub const MIN_LEN: usize = RECORDS_OFFSET + RECORD_LEN;
/// Bytes 1 to 3 of every data record.
pub const SIGNATURE: [u8; 3] = [0x00, 0x01, 0x00];

/// One fixed-size slot of the record region.
///
/// Reserved spans are opaque; some of them vary between console firmware
/// versions.
#[repr(C)]
#[derive(Debug, FromBytes)]
pub struct Slot {
    segment: u8,         // 0
    signature: [u8; 3],  // 1..4
    power: u8,           // 4
    _reserved_a: [u8; 27],
    timestamp: U32,      // 32..36
    _reserved_b: [u8; 2],
    cadence: u8,         // 38
    _reserved_c: u8,
    distance: F32,       // 40..44
    _reserved_d: [u8; 2],
    heart_rate: u8,      // 46
    _reserved_e: u8,
}

const _: () = assert!(size_of::<Slot>() == RECORD_LEN);

impl Slot {
    /// Read a slot from exactly [`RECORD_LEN`] bytes.
    pub fn read(r: &[u8]) -> Option<Self> {
        Self::read_from_bytes(r).ok()
    }

    /// Whether this slot carries the data record signature.
    pub fn is_record(&self) -> bool {
        self.signature == SIGNATURE
    }

    /// Extract the sensor fields, if this slot is a data record.
    pub fn record(&self) -> Option<RawRecord> {
        if !self.is_record() {
            return None;
        }

        Some(RawRecord {
            segment: self.segment,
            power: self.power,
            timestamp_ms: self.timestamp.get(),
            cadence: self.cadence,
            heart_rate: self.heart_rate,
            distance_km: self.distance.get(),
        })
    }
}

/// Sensor fields of a single data record, as written by the console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    /// Lap segment marker (not interpreted).
    pub segment: u8,
    /// Power in watts.
    pub power: u8,
    /// Milliseconds since the start of the workout.
    pub timestamp_ms: u32,
    /// Cadence in revolutions per minute.
    pub cadence: u8,
    /// Heart rate in beats per minute.
    pub heart_rate: u8,
    /// Cumulative distance in kilometres.
    pub distance_km: f32,
}

impl RawRecord {
    /// Elapsed whole seconds, used as the aggregation key.
    pub fn elapsed_secs(&self) -> u32 {
        self.timestamp_ms / 1000
    }
}
