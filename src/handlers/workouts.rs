use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{CreateWorkout, Workout};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn validate(input: &CreateWorkout) -> Result<()> {
    if input.name.is_empty() || input.date.is_empty() {
        return Err(AppError::Validation(
            "name and date are required".to_string(),
        ));
    }
    Ok(())
}

pub async fn list(State(state): State<WorkoutsState>) -> Result<Json<Vec<Workout>>> {
    let workouts = state.workout_repo.find_all().await?;
    Ok(Json(workouts))
}

pub async fn show(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
) -> Result<Json<Workout>> {
    let workout = state
        .workout_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;
    Ok(Json(workout))
}

pub async fn create(
    State(state): State<WorkoutsState>,
    Json(input): Json<CreateWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    validate(&input)?;
    let workout = state.workout_repo.create(input).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn update(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
    Json(input): Json<CreateWorkout>,
) -> Result<Json<Workout>> {
    validate(&input)?;
    let workout = state
        .workout_repo
        .replace(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;
    Ok(Json(workout))
}

pub async fn delete(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let success = state.workout_repo.delete(id).await?;
    Ok(Json(DeleteResponse { success }))
}
