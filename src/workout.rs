//! The decoded workout.

use alloc::{string::String, vec::Vec};

use crate::sans::bucket::{Buckets, Sensors, round_mean};

/// Name used when a capture carries no readable athlete name.
pub const UNKNOWN_ATHLETE: &str = "Unknown Athlete";

/// Highest cadence a Training Center document can carry.
pub const MAX_CADENCE: u8 = 254;

/// One second of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trackpoint {
    /// Whole seconds since the start of the workout.
    pub elapsed: u32,
    /// Mean power in watts.
    pub power: u16,
    /// Mean cadence in revolutions per minute, if a cadence sensor was
    /// connected.
    pub cadence: Option<u8>,
    /// Mean heart rate in beats per minute, if a heart-rate strap was
    /// connected.
    pub heart_rate: Option<u8>,
    /// Cumulative distance in metres.
    pub distance: Option<f64>,
}

/// Whole-workout statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryStats {
    /// Elapsed seconds at the last accepted record.
    pub duration: u32,
    /// Mean power over seconds with positive power.
    pub avg_power: u16,
    pub max_power: u16,
    pub has_cadence: bool,
    pub has_heart_rate: bool,
    /// Number of raw records that passed validation.
    pub records: usize,
    /// Total distance in metres.
    pub distance: f64,
    pub avg_cadence: Option<u8>,
    pub max_cadence: Option<u8>,
    pub avg_heart_rate: Option<u8>,
    pub max_heart_rate: Option<u8>,
}

/// A workout resampled to one trackpoint per elapsed second.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    athlete: String,
    trackpoints: Vec<Trackpoint>,
    stats: SummaryStats,
}

impl Workout {
    /// Build a workout from aggregated buckets.
    ///
    /// `last_ms` is the raw timestamp of the last accepted record and
    /// `records` the number of accepted records, both as reported by the
    /// [`TimestampGate`](crate::sans::gate::TimestampGate).
    pub fn assemble(
        athlete: Option<&str>,
        buckets: &Buckets,
        sensors: Sensors,
        last_ms: u32,
        records: usize,
    ) -> Self {
        let mut trackpoints = Vec::with_capacity(buckets.len());
        let mut furthest: Option<f64> = None;

        for (elapsed, bucket) in buckets.iter() {
            let distance = bucket.distance_km().map(|km| {
                let metres = f64::from(km) * 1000.0;
                // Clamp to the running maximum so glitches never step backward.
                let metres = furthest.map_or(metres, |f| f.max(metres));
                furthest = Some(metres);
                metres
            });

            trackpoints.push(Trackpoint {
                elapsed: *elapsed,
                power: bucket.power(),
                cadence: bucket
                    .cadence()
                    .filter(|c| sensors.cadence && *c != 0)
                    .map(|c| c.min(MAX_CADENCE)),
                heart_rate: bucket
                    .heart_rate()
                    .filter(|h| sensors.heart_rate && *h != 0),
                distance,
            });
        }

        let stats = summarize(&trackpoints, sensors, last_ms, records);

        Self {
            athlete: String::from(athlete.unwrap_or(UNKNOWN_ATHLETE)),
            trackpoints,
            stats,
        }
    }

    /// Athlete name, or [`UNKNOWN_ATHLETE`].
    pub fn athlete(&self) -> &str {
        &self.athlete
    }

    /// Trackpoints in ascending order of elapsed second.
    pub fn trackpoints(&self) -> &[Trackpoint] {
        &self.trackpoints
    }

    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }
}

fn summarize(trackpoints: &[Trackpoint], sensors: Sensors, last_ms: u32, records: usize) -> SummaryStats {
    let (power_total, power_n, max_power) = trackpoints
        .iter()
        .map(|t| t.power)
        .filter(|p| *p > 0)
        .fold((0u32, 0u32, 0u16), |(total, n, max), p| {
            (total + u32::from(p), n + 1, max.max(p))
        });

    let (avg_cadence, max_cadence) = mean_and_max(trackpoints.iter().filter_map(|t| t.cadence));
    let (avg_heart_rate, max_heart_rate) =
        mean_and_max(trackpoints.iter().filter_map(|t| t.heart_rate));

    let distance = trackpoints
        .iter()
        .rev()
        .find_map(|t| t.distance)
        .unwrap_or(0.0);

    SummaryStats {
        duration: last_ms / 1000,
        avg_power: round_mean(power_total, power_n).unwrap_or(0) as u16,
        max_power,
        has_cadence: sensors.cadence,
        has_heart_rate: sensors.heart_rate,
        records,
        distance,
        avg_cadence,
        max_cadence,
        avg_heart_rate,
        max_heart_rate,
    }
}

fn mean_and_max(values: impl Iterator<Item = u8>) -> (Option<u8>, Option<u8>) {
    let (total, n, max) = values.fold((0u32, 0u32, None), |(total, n, max): (u32, u32, Option<u8>), v| {
        (total + u32::from(v), n + 1, Some(max.map_or(v, |m| m.max(v))))
    });

    (round_mean(total, n).map(|v| v as u8), max)
}
