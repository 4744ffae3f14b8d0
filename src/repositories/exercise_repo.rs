use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{ExerciseWithWorkout, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Every exercise across all workouts, joined with the parent's date
    /// and name, newest workout first then by exercise name.
    pub async fn find_all_with_workout(&self) -> Result<Vec<ExerciseWithWorkout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT e.id, e.workout_id, e.name, e.sets, e.reps, e.weight, e.notes,
                        w.date AS workout_date, w.name AS workout_name
                 FROM exercises e
                 JOIN workouts w ON e.workout_id = w.id
                 ORDER BY w.date DESC, e.name",
            )?;
            let exercises = stmt
                .query_map([], ExerciseWithWorkout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Exercises whose name contains the given substring, newest workout
    /// first. Case folding follows SQLite's LIKE default.
    pub async fn history(&self, name: &str) -> Result<Vec<ExerciseWithWorkout>> {
        let pool = self.pool.clone();
        let pattern = format!("%{}%", name);
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT e.id, e.workout_id, e.name, e.sets, e.reps, e.weight, e.notes,
                        w.date AS workout_date, w.name AS workout_name
                 FROM exercises e
                 JOIN workouts w ON e.workout_id = w.id
                 WHERE e.name LIKE ?
                 ORDER BY w.date DESC",
            )?;
            let exercises = stmt
                .query_map([&pattern], ExerciseWithWorkout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
