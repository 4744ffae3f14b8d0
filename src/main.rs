use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gymlog::handlers::{exercises, workouts};
use gymlog::repositories::{ExerciseRepository, WorkoutRepository};
use gymlog::{config, db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymlog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Opening database: {}", config::DATABASE_PATH);

    let pool = db::create_pool(config::DATABASE_PATH)?;

    migrations::run_migrations(&pool)?;

    // Create handler states
    let workouts_state = workouts::WorkoutsState {
        workout_repo: WorkoutRepository::new(pool.clone()),
    };
    let exercises_state = exercises::ExercisesState {
        exercise_repo: ExerciseRepository::new(pool.clone()),
    };

    let app = routes::create_router(workouts_state, exercises_state);

    tracing::info!("Starting server at http://{}", config::SERVER_ADDR);

    let listener = TcpListener::bind(config::SERVER_ADDR).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
