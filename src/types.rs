use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkoutError};

pub type WorkoutId = u64;

/// A geographic position, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♂️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(WorkoutError::validation(format!(
                "unknown workout type {other:?}"
            ))),
        }
    }
}

/// The type-specific input that goes along with distance and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extra {
    Running { cadence: f64 },
    Cycling { elevation_gain: f64 },
}

/// Variant data of a workout, including its derived metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    /// `pace` is minutes per kilometer.
    Running { cadence: f64, pace: f64 },
    /// `speed` is kilometers per hour; elevation gain may be zero or negative.
    Cycling { elevation_gain: f64, speed: f64 },
}

impl Activity {
    fn derive(distance: f64, duration: f64, extra: Extra) -> Self {
        match extra {
            Extra::Running { cadence } => Self::Running {
                cadence,
                pace: duration / distance,
            },
            Extra::Cycling { elevation_gain } => Self::Cycling {
                elevation_gain,
                speed: distance / (duration / 60.0),
            },
        }
    }
}

/// One recorded exercise session. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    coords: Coords,
    distance: f64,
    duration: f64,
    created_at: DateTime<Utc>,
    activity: Activity,
}

impl Workout {
    /// Builds a workout and computes its derived metric. Inputs are assumed validated.
    pub(crate) fn new(
        id: WorkoutId,
        coords: Coords,
        distance: f64,
        duration: f64,
        created_at: DateTime<Utc>,
        extra: Extra,
    ) -> Self {
        Self {
            id,
            coords,
            distance,
            duration,
            created_at,
            activity: Activity::derive(distance, duration, extra),
        }
    }

    pub const fn id(&self) -> WorkoutId {
        self.id
    }

    pub const fn coords(&self) -> Coords {
        self.coords
    }

    /// Kilometers.
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Minutes.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    pub const fn kind(&self) -> WorkoutKind {
        match self.activity {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Pace for runs, speed for rides.
    pub const fn derived_metric(&self) -> f64 {
        match self.activity {
            Activity::Running { pace, .. } => pace,
            Activity::Cycling { speed, .. } => speed,
        }
    }

    pub const fn derived_metric_unit(&self) -> &'static str {
        match self.activity {
            Activity::Running { .. } => "min/km",
            Activity::Cycling { .. } => "km/h",
        }
    }

    /// Cadence for runs, elevation gain for rides.
    pub const fn tertiary(&self) -> f64 {
        match self.activity {
            Activity::Running { cadence, .. } => cadence,
            Activity::Cycling { elevation_gain, .. } => elevation_gain,
        }
    }

    pub const fn tertiary_icon(&self) -> &'static str {
        match self.activity {
            Activity::Running { .. } => "🦶",
            Activity::Cycling { .. } => "⛰",
        }
    }

    pub const fn tertiary_unit(&self) -> &'static str {
        match self.activity {
            Activity::Running { .. } => "spm",
            Activity::Cycling { .. } => "m",
        }
    }

    /// e.g. `Running on April 14`
    pub fn title(&self) -> String {
        format!(
            "{} on {}",
            self.kind().label(),
            crate::utils::month_day(self.created_at)
        )
    }

    /// e.g. `🏃‍♂️ Running on April 14`
    pub fn popup_label(&self) -> String {
        format!("{} {}", self.kind().icon(), self.title())
    }

    pub fn to_record(&self) -> WorkoutRecord {
        let (cadence, elev_gain, pace, speed) = match self.activity {
            Activity::Running { cadence, pace } => (Some(cadence), None, Some(pace), None),
            Activity::Cycling {
                elevation_gain,
                speed,
            } => (None, Some(elevation_gain), None, Some(speed)),
        };

        WorkoutRecord {
            coords: self.coords,
            distance: self.distance,
            duration: self.duration,
            id: self.id,
            kind: self.kind(),
            cadence,
            elev_gain,
            pace,
            speed,
            date: Some(self.created_at),
        }
    }
}

/// Flattened, behavior-free shape of a workout as it is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub coords: Coords,
    pub distance: f64,
    pub duration: f64,
    pub id: WorkoutId,
    #[serde(rename = "type")]
    pub kind: WorkoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elev_gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl WorkoutRecord {
    /// The variant input carried by this record, if its field is present.
    pub const fn extra(&self) -> Option<Extra> {
        match (self.kind, self.cadence, self.elev_gain) {
            (WorkoutKind::Running, Some(cadence), _) => Some(Extra::Running { cadence }),
            (WorkoutKind::Cycling, _, Some(elevation_gain)) => {
                Some(Extra::Cycling { elevation_gain })
            }
            _ => None,
        }
    }

    /// Rebuilds the workout, recomputing the derived metric from distance and duration.
    /// Persisted `pace`/`speed` are ignored; a missing `date` falls back to `fallback_date`.
    pub fn into_workout(self, fallback_date: DateTime<Utc>) -> Option<Workout> {
        let extra = self.extra()?;
        Some(Workout::new(
            self.id,
            self.coords,
            self.distance,
            self.duration,
            self.date.unwrap_or(fallback_date),
            extra,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let w = Workout::new(
            1,
            Coords::new(40.0, -73.0),
            5.0,
            25.0,
            at(),
            Extra::Running { cadence: 150.0 },
        );
        assert_eq!(w.kind(), WorkoutKind::Running);
        assert_eq!(w.derived_metric(), 5.0);
        assert_eq!(w.tertiary(), 150.0);
        assert_eq!(w.derived_metric_unit(), "min/km");
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        let w = Workout::new(
            2,
            Coords::new(40.1, -73.1),
            20.0,
            60.0,
            at(),
            Extra::Cycling {
                elevation_gain: 300.0,
            },
        );
        assert_eq!(w.derived_metric(), 20.0);
        assert_eq!(w.tertiary_unit(), "m");
    }

    #[test]
    fn labels_use_created_at() {
        let w = Workout::new(
            3,
            Coords::new(0.0, 0.0),
            1.0,
            1.0,
            at(),
            Extra::Running { cadence: 1.0 },
        );
        assert_eq!(w.title(), "Running on April 14");
        assert_eq!(w.popup_label(), "🏃‍♂️ Running on April 14");
    }

    #[test]
    fn kind_parses_loosely() {
        assert_eq!(" Cycling ".parse::<WorkoutKind>().unwrap(), WorkoutKind::Cycling);
        assert!(matches!(
            "swimming".parse::<WorkoutKind>(),
            Err(WorkoutError::Validation(_))
        ));
    }

    #[test]
    fn record_uses_persisted_field_names() {
        let w = Workout::new(
            7,
            Coords::new(40.1, -73.1),
            20.0,
            60.0,
            at(),
            Extra::Cycling {
                elevation_gain: -12.0,
            },
        );
        let json = serde_json::to_value(w.to_record()).unwrap();
        assert_eq!(json["coords"], serde_json::json!([40.1, -73.1]));
        assert_eq!(json["type"], "cycling");
        assert_eq!(json["elevGain"], -12.0);
        assert_eq!(json["speed"], 20.0);
        assert!(json.get("cadence").is_none());
        assert!(json.get("pace").is_none());
    }

    #[test]
    fn record_without_variant_field_does_not_rebuild() {
        let rec: WorkoutRecord = serde_json::from_str(
            r#"{"coords":[1.0,2.0],"distance":3,"duration":4,"id":5,"type":"running"}"#,
        )
        .unwrap();
        assert!(rec.into_workout(at()).is_none());
    }

    #[test]
    fn rebuilding_rederives_metric() {
        let rec: WorkoutRecord = serde_json::from_str(
            r#"{"coords":[1.0,2.0],"distance":4,"duration":20,"id":5,"type":"running","cadence":170,"pace":99}"#,
        )
        .unwrap();
        let w = rec.into_workout(at()).unwrap();
        assert_eq!(w.derived_metric(), 5.0);
        assert_eq!(w.created_at(), at());
    }
}
