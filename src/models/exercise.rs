use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::from_row::FromSqliteRow;

/// A single movement within a workout. Exercises only exist as part of
/// their parent workout's batch; there is no standalone write path.
#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub notes: Option<String>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Exercise {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            name: row.get("name")?,
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            notes: row.get("notes")?,
        })
    }
}

/// An exercise joined with its parent workout's date and name, for the
/// flat listing and history views.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseWithWorkout {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub notes: Option<String>,
    pub workout_date: String,
    pub workout_name: String,
}

impl FromSqliteRow for ExerciseWithWorkout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(ExerciseWithWorkout {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            name: row.get("name")?,
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            notes: row.get("notes")?,
            workout_date: row.get("workout_date")?,
            workout_name: row.get("workout_name")?,
        })
    }
}

/// One exercise in a create/replace batch. Missing numeric fields default
/// to zero, mirroring the column defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sets: i64,
    #[serde(default)]
    pub reps: i64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub notes: Option<String>,
}
