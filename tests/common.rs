#![cfg(feature = "std")]

use csv::ReaderBuilder;
use pretty_assertions::assert_eq;
use sprocket::{Trackpoint, Workout};

const PATH: &str = "fixtures/ramp-session.bin";

#[test]
fn decode_slice_ramp() {
    let data = std::fs::read(PATH).unwrap();
    let workout = sprocket::decode_slice(&data).unwrap();
    validate(&workout);
}

#[test]
fn decode_reader_ramp() {
    let mut file = std::fs::File::open(PATH).unwrap();
    let workout = sprocket::decode_reader(&mut file).unwrap();
    validate(&workout);
}

#[test]
fn ramp_summary() {
    let data = std::fs::read(PATH).unwrap();
    let workout = sprocket::decode_slice(&data).unwrap();
    let stats = workout.stats();

    assert_eq!(workout.athlete(), "Marit Bjørgen");
    // The trailing record jumps ~1.1e9 ms ahead and must not count.
    assert_eq!(stats.records, 120);
    assert_eq!(stats.duration, 66);
    assert_eq!(workout.trackpoints().len(), 67);
    assert_eq!(stats.avg_power, 144);
    assert_eq!(stats.max_power, 209);
    // Cadence varies around the idle value; heart rate glitches only 3 times.
    assert!(stats.has_cadence);
    assert!(!stats.has_heart_rate);
    assert_eq!(stats.avg_cadence, Some(89));
    assert_eq!(stats.max_cadence, Some(94));
    assert_eq!(stats.avg_heart_rate, None);
    assert_eq!(format!("{:.2}", stats.distance), "906.25");
}

fn validate(workout: &Workout) {
    let path = std::path::Path::new(PATH).with_extension("csv");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();

    let expected: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect();

    let found: Vec<Vec<String>> = workout.trackpoints().iter().map(row).collect();

    assert_eq!(found, expected);
}

fn row(t: &Trackpoint) -> Vec<String> {
    fn opt<T: ToString>(v: Option<T>) -> String {
        v.map(|v| v.to_string()).unwrap_or_default()
    }

    vec![
        t.elapsed.to_string(),
        t.power.to_string(),
        opt(t.cadence),
        opt(t.heart_rate),
        opt(t.distance.map(|m| format!("{m:.2}"))),
    ]
}
