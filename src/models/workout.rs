use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::exercise::{Exercise, ExerciseInput};
use super::from_row::FromSqliteRow;

/// A logged training session and its exercise batch.
#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub notes: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Workout {
            id: row.get("id")?,
            name: row.get("name")?,
            date: row.get("date")?,
            notes: row.get("notes")?,
            exercises: Vec::new(),
        })
    }
}

/// Request body for POST and PUT. Fields default so that a missing `name`
/// or `date` reaches handler validation instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkout {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}
