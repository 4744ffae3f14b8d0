use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::ExerciseWithWorkout;
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn list(State(state): State<ExercisesState>) -> Result<Json<Vec<ExerciseWithWorkout>>> {
    let exercises = state.exercise_repo.find_all_with_workout().await?;
    Ok(Json(exercises))
}

pub async fn history(
    State(state): State<ExercisesState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<ExerciseWithWorkout>>> {
    let exercises = state.exercise_repo.history(&name).await?;
    Ok(Json(exercises))
}
