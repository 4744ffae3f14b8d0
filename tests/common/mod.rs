use axum::{body::Body, response::Response, Router};
use http_body_util::BodyExt;

use gymlog::db::{create_memory_pool, DbPool};
use gymlog::handlers::{exercises, workouts};
use gymlog::migrations::run_migrations_for_tests;
use gymlog::repositories::{ExerciseRepository, WorkoutRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let workouts_state = workouts::WorkoutsState {
        workout_repo: WorkoutRepository::new(pool.clone()),
    };
    let exercises_state = exercises::ExercisesState {
        exercise_repo: ExerciseRepository::new(pool.clone()),
    };

    gymlog::routes::create_router(workouts_state, exercises_state)
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> http::Request<Body> {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
