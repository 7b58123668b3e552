use chrono::{DateTime, Utc};

use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::types::{Coords, Extra, Workout, WorkoutId, WorkoutRecord};

/// Ordered, in-memory collection of workouts plus the id counter.
///
/// Iteration order is insertion order, oldest first. Ids start at 1 and are
/// never handed out twice by the same store, even across `clear`.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    last_id: WorkoutId,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the inputs, build the matching variant, and append it.
    ///
    /// Invalid input is rejected and nothing is added; the id counter only
    /// moves on success.
    pub fn create(
        &mut self,
        coords: Coords,
        distance: f64,
        duration: f64,
        extra: Extra,
        created_at: DateTime<Utc>,
    ) -> Result<&Workout> {
        validate(distance, duration, extra)?;

        self.last_id += 1;
        let workout = Workout::new(self.last_id, coords, distance, duration, created_at, extra);
        dlog!(
            "workout_created id={} kind={} metric={:.3}",
            workout.id(),
            workout.kind(),
            workout.derived_metric()
        );

        self.workouts.push(workout);
        Ok(&self.workouts[self.workouts.len() - 1])
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find_by_id(&self, id: WorkoutId) -> Result<&Workout> {
        self.workouts
            .iter()
            .find(|w| w.id() == id)
            .ok_or(WorkoutError::NotFound(id))
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Take back the most recent workout if it is `id`, e.g. after its save failed.
    /// Its id stays used.
    pub fn discard(&mut self, id: WorkoutId) -> Option<Workout> {
        if self.workouts.last().map(Workout::id) == Some(id) {
            self.workouts.pop()
        } else {
            None
        }
    }

    /// Drop every workout. The id counter keeps going.
    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    /// Replace the contents with persisted records, bypassing validation.
    ///
    /// Records that lack their variant field are skipped. The counter moves
    /// past the largest restored id so new workouts never collide with them.
    pub fn restore(&mut self, records: Vec<WorkoutRecord>, now: DateTime<Utc>) -> usize {
        self.workouts.clear();
        for rec in records {
            let id = rec.id;
            let kind = rec.kind;
            let Some(workout) = rec.into_workout(now) else {
                tracing::warn!(id, %kind, "skipping stored workout without its variant field");
                continue;
            };
            self.last_id = self.last_id.max(workout.id());
            self.workouts.push(workout);
        }
        self.workouts.len()
    }
}

fn validate(distance: f64, duration: f64, extra: Extra) -> Result<()> {
    let positive = |name: &str, v: f64| {
        if v.is_finite() && v > 0.0 {
            Ok(())
        } else {
            Err(WorkoutError::validation(format!(
                "{name} must be a positive number, got {v}"
            )))
        }
    };

    positive("distance", distance)?;
    positive("duration", duration)?;

    match extra {
        Extra::Running { cadence } => positive("cadence", cadence),
        Extra::Cycling { elevation_gain } if elevation_gain.is_finite() => Ok(()),
        Extra::Cycling { elevation_gain } => Err(WorkoutError::validation(format!(
            "elevation gain must be a number, got {elevation_gain}"
        ))),
    }
}
