//! Training Center (TCX v2) serialization.
//!
//! A decoded [`Workout`] becomes a single activity with one lap and one track.
//! Power travels in the `ActivityExtension/v2` namespace (`TPX/Watts` per
//! trackpoint, `LX/AvgWatts` and `LX/MaxWatts` per lap), which is where
//! consuming platforms look for it.
//!
//! The capture has no wall-clock time of its own, so the caller supplies the
//! start instant. Serialization is total and deterministic: the same workout
//! and start always render to the same bytes.

use alloc::string::String;
use core::fmt::{self, Write};

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};

use crate::workout::{Trackpoint, Workout};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2" xmlns:ns3="http://www.garmin.com/xmlschemas/ActivityExtension/v2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd">
  <Activities>
    <Activity Sport="Biking">
"#;

const FOOTER: &str = r#"    </Activity>
  </Activities>
</TrainingCenterDatabase>
"#;

/// Render a workout as a TCX document.
///
/// This method is also re-exported as `sprocket::serialize`.
pub fn serialize(workout: &Workout, start: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(512 + workout.trackpoints().len() * 256);
    write_tcx(&mut out, workout, start).expect("writing to a String is infallible");
    out
}

/// Stream a workout as a TCX document into a writer.
///
/// Errors only come from the writer itself.
pub fn write_tcx(w: &mut impl Write, workout: &Workout, start: DateTime<Utc>) -> fmt::Result {
    let start = start.trunc_subsecs(0);
    let stats = workout.stats();

    w.write_str(HEADER)?;
    writeln!(w, "      <Id>{}</Id>", Time(start))?;
    writeln!(w, r#"      <Lap StartTime="{}">"#, Time(start))?;
    writeln!(w, "        <TotalTimeSeconds>{}</TotalTimeSeconds>", stats.duration)?;
    writeln!(w, "        <DistanceMeters>{:.2}</DistanceMeters>", stats.distance)?;
    // The capture has no energy data.
    writeln!(w, "        <Calories>0</Calories>")?;
    if let Some(bpm) = stats.avg_heart_rate {
        writeln!(w, "        <AverageHeartRateBpm><Value>{bpm}</Value></AverageHeartRateBpm>")?;
    }
    if let Some(bpm) = stats.max_heart_rate {
        writeln!(w, "        <MaximumHeartRateBpm><Value>{bpm}</Value></MaximumHeartRateBpm>")?;
    }
    writeln!(w, "        <Intensity>Active</Intensity>")?;
    if let Some(rpm) = stats.avg_cadence {
        writeln!(w, "        <Cadence>{rpm}</Cadence>")?;
    }
    writeln!(w, "        <TriggerMethod>Manual</TriggerMethod>")?;

    writeln!(w, "        <Track>")?;
    for trackpoint in workout.trackpoints() {
        write_trackpoint(w, trackpoint, start)?;
    }
    writeln!(w, "        </Track>")?;

    writeln!(w, "        <Extensions>")?;
    writeln!(w, "          <ns3:LX>")?;
    if let Some(rpm) = stats.max_cadence {
        writeln!(w, "            <ns3:MaxBikeCadence>{rpm}</ns3:MaxBikeCadence>")?;
    }
    writeln!(w, "            <ns3:AvgWatts>{}</ns3:AvgWatts>", stats.avg_power)?;
    writeln!(w, "            <ns3:MaxWatts>{}</ns3:MaxWatts>", stats.max_power)?;
    writeln!(w, "          </ns3:LX>")?;
    writeln!(w, "        </Extensions>")?;
    writeln!(w, "      </Lap>")?;

    writeln!(w, "      <Notes>{}</Notes>", Escaped(workout.athlete()))?;
    w.write_str(FOOTER)
}

fn write_trackpoint(w: &mut impl Write, t: &Trackpoint, start: DateTime<Utc>) -> fmt::Result {
    let time = start + TimeDelta::seconds(i64::from(t.elapsed));

    writeln!(w, "          <Trackpoint>")?;
    writeln!(w, "            <Time>{}</Time>", Time(time))?;
    if let Some(metres) = t.distance {
        writeln!(w, "            <DistanceMeters>{metres:.2}</DistanceMeters>")?;
    }
    if let Some(bpm) = t.heart_rate {
        writeln!(w, "            <HeartRateBpm><Value>{bpm}</Value></HeartRateBpm>")?;
    }
    if let Some(rpm) = t.cadence {
        writeln!(w, "            <Cadence>{rpm}</Cadence>")?;
    }
    writeln!(w, "            <Extensions>")?;
    if t.cadence.is_some() {
        writeln!(w, r#"              <ns3:TPX CadenceSensor="Bike">"#)?;
    } else {
        writeln!(w, "              <ns3:TPX>")?;
    }
    writeln!(w, "                <ns3:Watts>{}</ns3:Watts>", t.power)?;
    writeln!(w, "              </ns3:TPX>")?;
    writeln!(w, "            </Extensions>")?;
    writeln!(w, "          </Trackpoint>")
}

/// Compact UTC timestamp at second precision.
struct Time(DateTime<Utc>);

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}

/// Text with XML special characters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;

        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            })?;
            rest = &rest[i + 1..];
        }

        f.write_str(rest)
    }
}
