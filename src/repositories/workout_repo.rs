use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateWorkout, Exercise, ExerciseInput, FromSqliteRow, Workout};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// All workouts with their exercises nested, newest date first.
    ///
    /// One LEFT JOIN ordered by parent, decoded by grouping consecutive
    /// rows on the workout id. A workout without exercises produces a
    /// single row with NULL child columns and an empty exercise list.
    pub async fn find_all(&self) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT w.id, w.name, w.date, w.notes,
                        e.id, e.workout_id, e.name, e.sets, e.reps, e.weight, e.notes
                 FROM workouts w
                 LEFT JOIN exercises e ON e.workout_id = w.id
                 ORDER BY w.date DESC, w.id, e.id",
            )?;

            let mut rows = stmt.query([])?;
            let mut workouts: Vec<Workout> = Vec::new();
            while let Some(row) = rows.next()? {
                let workout_id: i64 = row.get(0)?;
                if workouts.last().map(|w| w.id) != Some(workout_id) {
                    workouts.push(Workout {
                        id: workout_id,
                        name: row.get(1)?,
                        date: row.get(2)?,
                        notes: row.get(3)?,
                        exercises: Vec::new(),
                    });
                }
                // NULL child id means the workout has no exercises
                if let Some(exercise_id) = row.get::<_, Option<i64>>(4)? {
                    if let Some(workout) = workouts.last_mut() {
                        workout.exercises.push(Exercise {
                            id: exercise_id,
                            workout_id: row.get(5)?,
                            name: row.get(6)?,
                            sets: row.get(7)?,
                            reps: row.get(8)?,
                            weight: row.get(9)?,
                            notes: row.get(10)?,
                        });
                    }
                }
            }
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            Ok(load_workout(&conn, id)?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Insert a workout and its exercise batch in one transaction and
    /// return the persisted entity with generated ids.
    pub async fn create(&self, input: CreateWorkout) -> Result<Workout> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO workouts (name, date, notes) VALUES (?1, ?2, ?3)",
                params![input.name, input.date, input.notes],
            )?;
            let workout_id = tx.last_insert_rowid();
            insert_exercise_batch(&tx, workout_id, &input.exercises)?;
            tx.commit()?;

            load_workout(&conn, workout_id)?
                .ok_or_else(|| AppError::Internal("created workout not found".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Full-replace: update the scalar fields, drop every existing
    /// exercise and insert the new batch, all in one transaction.
    /// Returns `None` when no workout has the given id.
    pub async fn replace(&self, id: i64, input: CreateWorkout) -> Result<Option<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            let rows = tx.execute(
                "UPDATE workouts SET name = ?1, date = ?2, notes = ?3 WHERE id = ?4",
                params![input.name, input.date, input.notes, id],
            )?;
            if rows == 0 {
                return Ok(None);
            }
            tx.execute("DELETE FROM exercises WHERE workout_id = ?", [id])?;
            insert_exercise_batch(&tx, id, &input.exercises)?;
            tx.commit()?;

            Ok(load_workout(&conn, id)?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Returns whether a row was actually removed. Exercises go with the
    /// workout via the cascade.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM workouts WHERE id = ?", [id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

fn load_workout(conn: &Connection, id: i64) -> rusqlite::Result<Option<Workout>> {
    let mut stmt = conn.prepare("SELECT * FROM workouts WHERE id = ?")?;
    let workout = stmt.query_row([id], Workout::from_row).optional()?;

    let Some(mut workout) = workout else {
        return Ok(None);
    };

    let mut stmt = conn.prepare("SELECT * FROM exercises WHERE workout_id = ? ORDER BY id")?;
    workout.exercises = stmt
        .query_map([id], Exercise::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(workout))
}

fn insert_exercise_batch(
    conn: &Connection,
    workout_id: i64,
    batch: &[ExerciseInput],
) -> rusqlite::Result<()> {
    if batch.is_empty() {
        return Ok(());
    }

    let mut stmt = conn.prepare(
        "INSERT INTO exercises (workout_id, name, sets, reps, weight, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for exercise in batch {
        stmt.execute(params![
            workout_id,
            exercise.name,
            exercise.sets,
            exercise.reps,
            exercise.weight,
            exercise.notes
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn workout_input(name: &str, date: &str, exercises: Vec<ExerciseInput>) -> CreateWorkout {
        CreateWorkout {
            name: name.to_string(),
            date: date.to_string(),
            notes: None,
            exercises,
        }
    }

    fn exercise_input(name: &str, sets: i64, reps: i64, weight: f64) -> ExerciseInput {
        ExerciseInput {
            name: name.to_string(),
            sets,
            reps,
            weight,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_roundtrip() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let created = repo
            .create(workout_input(
                "Leg Day",
                "2024-01-01",
                vec![exercise_input("Squat", 5, 5, 100.0)],
            ))
            .await
            .unwrap();

        assert_eq!(created.name, "Leg Day");
        assert_eq!(created.date, "2024-01-01");
        assert_eq!(created.exercises.len(), 1);

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.exercises.len(), 1);

        let squat = &fetched.exercises[0];
        assert_eq!(squat.name, "Squat");
        assert_eq!(squat.sets, 5);
        assert_eq!(squat.reps, 5);
        assert_eq!(squat.weight, 100.0);
        assert_eq!(squat.workout_id, created.id);
    }

    #[tokio::test]
    async fn test_create_without_exercises_yields_empty_list() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let created = repo
            .create(workout_input("Rest Day", "2024-01-02", vec![]))
            .await
            .unwrap();

        assert!(created.exercises.is_empty());

        let listed = repo.find_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].exercises.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_not_exists() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let found = repo.find_by_id(42).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_date_descending() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        repo.create(workout_input("A", "2024-01-01", vec![]))
            .await
            .unwrap();
        repo.create(workout_input("B", "2024-03-01", vec![]))
            .await
            .unwrap();
        repo.create(workout_input("C", "2024-02-01", vec![]))
            .await
            .unwrap();

        let dates: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.date)
            .collect();

        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[tokio::test]
    async fn test_find_all_keeps_notes_with_delimiter_characters() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let mut exercise = exercise_input("Bench Press", 3, 8, 60.0);
        exercise.notes = Some("paused reps, grip: wide | felt heavy".to_string());
        repo.create(workout_input("Push", "2024-01-05", vec![exercise]))
            .await
            .unwrap();

        let listed = repo.find_all().await.unwrap();
        assert_eq!(listed[0].exercises.len(), 1);
        assert_eq!(
            listed[0].exercises[0].notes.as_deref(),
            Some("paused reps, grip: wide | felt heavy")
        );
    }

    #[tokio::test]
    async fn test_replace_discards_prior_exercises() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let created = repo
            .create(workout_input(
                "Pull",
                "2024-01-03",
                vec![
                    exercise_input("Row", 3, 10, 50.0),
                    exercise_input("Curl", 3, 12, 15.0),
                ],
            ))
            .await
            .unwrap();

        let replaced = repo
            .replace(
                created.id,
                workout_input(
                    "Pull",
                    "2024-01-03",
                    vec![exercise_input("Chin-up", 5, 5, 0.0)],
                ),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(replaced.exercises.len(), 1);
        assert_eq!(replaced.exercises[0].name, "Chin-up");

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.exercises.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_missing_workout_returns_none() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let replaced = repo
            .replace(99, workout_input("Ghost", "2024-01-01", vec![]))
            .await
            .unwrap();

        assert!(replaced.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_exercises() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool.clone());

        let created = repo
            .create(workout_input(
                "Legs",
                "2024-01-04",
                vec![exercise_input("Deadlift", 1, 5, 140.0)],
            ))
            .await
            .unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert!(deleted);

        assert!(repo.find_by_id(created.id).await.unwrap().is_none());

        let conn = pool.get().unwrap();
        let orphans: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM exercises WHERE workout_id = ?",
                [created.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_workout_returns_false() {
        let pool = setup_test_db();
        let repo = WorkoutRepository::new(pool);

        let deleted = repo.delete(7).await.unwrap();

        assert!(!deleted);
    }
}
