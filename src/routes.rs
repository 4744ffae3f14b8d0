use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::config;
use crate::handlers::{exercises, health, workouts};

pub fn create_router(
    workouts_state: workouts::WorkoutsState,
    exercises_state: exercises::ExercisesState,
) -> Router {
    Router::new()
        // Workout routes
        .route(
            "/api/workouts",
            get(workouts::list).post(workouts::create),
        )
        .route(
            "/api/workouts/{id}",
            get(workouts::show)
                .put(workouts::update)
                .delete(workouts::delete),
        )
        .with_state(workouts_state)
        // Exercise routes
        .route("/api/exercises", get(exercises::list))
        .route("/api/exercises/history/{name}", get(exercises::history))
        .with_state(exercises_state)
        // Health check
        .route("/health", get(health::health_check))
        // Static client
        .fallback_service(ServeDir::new(config::PUBLIC_DIR))
}
