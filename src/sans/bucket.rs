//! Per-second aggregation and sensor presence.

use alloc::collections::{BTreeMap, btree_map};

use super::layout::RawRecord;

/// Cadence written by the console when no cadence sensor is paired.
pub const IDLE_CADENCE: u8 = 90;
/// Heart rate written by the console when no heart-rate strap is paired.
pub const IDLE_HEART_RATE: u8 = 50;
/// Share of records that must differ from the idle default for a sensor to
/// count as connected.
pub const PRESENCE_THRESHOLD: f64 = 0.05;

/// Readings collected for one elapsed second.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    power: Sum,
    cadence: Sum,
    heart_rate: Sum,
    distance_km: Option<f32>,
}

impl Bucket {
    fn add(&mut self, r: &RawRecord) {
        self.power.add(r.power);
        self.cadence.add(r.cadence);
        self.heart_rate.add(r.heart_rate);

        // Distance is cumulative, so the latest real reading wins. Placeholder
        // zeros must not overwrite it.
        if r.distance_km.is_finite() && r.distance_km > 0.0 {
            self.distance_km = Some(r.distance_km);
        }
    }

    /// Mean power, rounded half up.
    pub fn power(&self) -> u16 {
        self.power.mean().unwrap_or(0) as u16
    }

    /// Mean cadence, rounded half up.
    pub fn cadence(&self) -> Option<u8> {
        self.cadence.mean().map(|v| v as u8)
    }

    /// Mean heart rate, rounded half up.
    pub fn heart_rate(&self) -> Option<u8> {
        self.heart_rate.mean().map(|v| v as u8)
    }

    /// Latest positive cumulative distance, in kilometres.
    pub fn distance_km(&self) -> Option<f32> {
        self.distance_km
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Sum {
    total: u32,
    n: u32,
}

impl Sum {
    fn add(&mut self, v: u8) {
        self.total += u32::from(v);
        self.n += 1;
    }

    fn mean(&self) -> Option<u32> {
        round_mean(self.total, self.n)
    }
}

/// Arithmetic mean of `n` non-negative readings summing to `total`, rounded
/// half up.
///
/// Computed in integers, so `100.5` always becomes `101`.
pub fn round_mean(total: u32, n: u32) -> Option<u32> {
    if n == 0 {
        return None;
    }

    let (total, n) = (u64::from(total), u64::from(n));
    Some(((2 * total + n) / (2 * n)) as u32)
}

/// Accepted records grouped by elapsed second.
#[derive(Debug, Clone, Default)]
pub struct Buckets(BTreeMap<u32, Bucket>);

impl Buckets {
    /// Fold an accepted record into the bucket of its elapsed second.
    pub fn add(&mut self, r: &RawRecord) {
        self.0.entry(r.elapsed_secs()).or_default().add(r);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Buckets in ascending order of elapsed second.
    pub fn iter(&self) -> btree_map::Iter<'_, u32, Bucket> {
        self.0.iter()
    }
}

/// Which optional sensors were genuinely connected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sensors {
    pub cadence: bool,
    pub heart_rate: bool,
}

/// Counts of accepted records with a real (non-idle, non-zero) reading.
#[derive(Debug, Clone)]
pub struct SensorTally {
    idle_cadence: u8,
    idle_heart_rate: u8,
    cadence: usize,
    heart_rate: usize,
    records: usize,
}

impl Default for SensorTally {
    fn default() -> Self {
        Self::new(IDLE_CADENCE, IDLE_HEART_RATE)
    }
}

impl SensorTally {
    pub fn new(idle_cadence: u8, idle_heart_rate: u8) -> Self {
        Self {
            idle_cadence,
            idle_heart_rate,
            cadence: 0,
            heart_rate: 0,
            records: 0,
        }
    }

    pub fn add(&mut self, r: &RawRecord) {
        self.records += 1;

        if r.cadence != 0 && r.cadence != self.idle_cadence {
            self.cadence += 1;
        }
        if r.heart_rate != 0 && r.heart_rate != self.idle_heart_rate {
            self.heart_rate += 1;
        }
    }

    /// Classify each sensor as connected when the share of records with a real
    /// reading strictly exceeds `threshold`.
    ///
    /// A handful of glitched readings stays below the threshold, and a console
    /// writing its idle value on nearly every sample never crosses it.
    pub fn classify(&self, threshold: f64) -> Sensors {
        if self.records == 0 {
            return Sensors::default();
        }

        let share = |count: usize| count as f64 / self.records as f64;

        Sensors {
            cadence: share(self.cadence) > threshold,
            heart_rate: share(self.heart_rate) > threshold,
        }
    }
}
