pub mod exercise;
pub mod from_row;
pub mod workout;

pub use exercise::{Exercise, ExerciseInput, ExerciseWithWorkout};
pub use from_row::FromSqliteRow;
pub use workout::{CreateWorkout, Workout};
