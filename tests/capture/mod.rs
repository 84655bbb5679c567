#![allow(dead_code)]

//! Synthetic capture builder shared by the integration tests.

pub use sprocket::sans::layout::{NAME_LEN, NAME_OFFSET, RECORD_LEN, RECORDS_OFFSET, SIGNATURE};

/// One data record, in the console's units.
#[derive(Debug, Clone, Copy)]
pub struct Rec {
    pub timestamp_ms: u32,
    pub power: u8,
    pub cadence: u8,
    pub heart_rate: u8,
    pub distance_km: f32,
}

/// A record with idle sensors and no distance.
pub fn rec(timestamp_ms: u32, power: u8) -> Rec {
    Rec {
        timestamp_ms,
        power,
        cadence: 90,
        heart_rate: 50,
        distance_km: 0.0,
    }
}

impl Rec {
    pub fn cadence(self, cadence: u8) -> Self {
        Self { cadence, ..self }
    }

    pub fn heart_rate(self, heart_rate: u8) -> Self {
        Self { heart_rate, ..self }
    }

    pub fn km(self, distance_km: f32) -> Self {
        Self { distance_km, ..self }
    }
}

#[derive(Debug, Default)]
pub struct Capture {
    bytes: Vec<u8>,
}

impl Capture {
    pub fn new(name: &str) -> Self {
        let mut bytes = vec![0u8; RECORDS_OFFSET];
        bytes[..4].copy_from_slice(b"CAPT");
        let name = &name.as_bytes()[..name.len().min(NAME_LEN)];
        bytes[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);
        Self { bytes }
    }

    pub fn record(mut self, r: Rec) -> Self {
        let mut slot = [0x5Au8; RECORD_LEN];
        slot[0] = 0;
        slot[1..4].copy_from_slice(&SIGNATURE);
        slot[4] = r.power;
        slot[32..36].copy_from_slice(&r.timestamp_ms.to_le_bytes());
        slot[38] = r.cadence;
        slot[40..44].copy_from_slice(&r.distance_km.to_le_bytes());
        slot[46] = r.heart_rate;
        self.bytes.extend_from_slice(&slot);
        self
    }

    pub fn records(self, rs: impl IntoIterator<Item = Rec>) -> Self {
        rs.into_iter().fold(self, Capture::record)
    }

    /// A slot that fails the signature check.
    pub fn noise(mut self) -> Self {
        let mut slot = [0u8; RECORD_LEN];
        slot[1..4].copy_from_slice(&[0x00, 0x02, 0x00]);
        slot[32..36].copy_from_slice(&1000u32.to_le_bytes());
        self.bytes.extend_from_slice(&slot);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
