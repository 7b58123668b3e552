use anyhow::{Context, Result};

use crate::dlog;
use crate::storage::KeyValueStore;
use crate::types::{Workout, WorkoutRecord};

/// Saves and loads the whole workout list as one JSON value under a fixed key.
pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Overwrite the snapshot with `workouts`, in order.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<()> {
        let records: Vec<WorkoutRecord> = workouts.iter().map(Workout::to_record).collect();
        let json = serde_json::to_string(&records).context("Serializing workouts")?;
        self.store.set(&self.key, &json)?;
        dlog!("saved workouts={} key={}", records.len(), self.key);
        Ok(())
    }

    /// Read the snapshot back as plain records. A missing key is an empty list.
    pub fn load(&self) -> Result<Vec<WorkoutRecord>> {
        let Some(json) = self.store.get(&self.key)? else {
            dlog!("no stored workouts key={}", self.key);
            return Ok(Vec::new());
        };

        let records: Vec<WorkoutRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Parsing stored workouts under key {:?}", self.key))?;
        dlog!("loaded workouts={} key={}", records.len(), self.key);
        Ok(records)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::store::WorkoutStore;
    use crate::types::{Coords, Extra};
    use chrono::{TimeZone, Utc};

    fn sample() -> WorkoutStore {
        let at = Utc.with_ymd_and_hms(2024, 4, 14, 7, 0, 0).unwrap();
        let mut store = WorkoutStore::new();
        store
            .create(
                Coords::new(40.0, -73.0),
                5.0,
                25.0,
                Extra::Running { cadence: 150.0 },
                at,
            )
            .unwrap();
        store
            .create(
                Coords::new(40.1, -73.1),
                20.0,
                60.0,
                Extra::Cycling {
                    elevation_gain: 300.0,
                },
                at,
            )
            .unwrap();
        store
    }

    #[test]
    fn save_then_load_keeps_every_field() {
        let store = sample();
        let mut p = Persistence::new(MemoryStore::new(), "workouts");
        p.save(store.all()).unwrap();

        let records = p.load().unwrap();
        let expected: Vec<_> = store.all().iter().map(Workout::to_record).collect();
        assert_eq!(records, expected);
        assert_eq!(records[0].pace, Some(5.0));
        assert_eq!(records[1].speed, Some(20.0));
    }

    #[test]
    fn load_without_key_is_empty() {
        let p = Persistence::new(MemoryStore::new(), "workouts");
        assert!(p.load().unwrap().is_empty());
    }

    #[test]
    fn clear_then_load_is_empty() {
        let mut p = Persistence::new(MemoryStore::new(), "workouts");
        p.save(sample().all()).unwrap();
        p.clear().unwrap();
        assert!(p.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let mut p = Persistence::new(MemoryStore::new(), "workouts");
        p.save(sample().all()).unwrap();
        p.save(&sample().all()[..1]).unwrap();
        assert_eq!(p.load().unwrap().len(), 1);
    }

    #[test]
    fn garbage_snapshot_is_an_error() {
        let mut kv = MemoryStore::new();
        kv.set("workouts", "not json").unwrap();
        let p = Persistence::new(kv, "workouts");
        assert!(p.load().is_err());
    }

    #[test]
    fn reads_snapshot_written_without_dates() {
        let mut kv = MemoryStore::new();
        kv.set(
            "workouts",
            r#"[{"coords":[40,-73],"distance":5,"duration":25,"id":1,"type":"running","cadence":150,"pace":5}]"#,
        )
        .unwrap();
        let records = Persistence::new(kv, "workouts").load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, None);
        assert_eq!(records[0].coords, Coords::new(40.0, -73.0));
    }
}
