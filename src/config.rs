//! Fixed deployment constants. The tracker is single-user and runs from the
//! working directory; there is no environment-based configuration.

pub const DATABASE_PATH: &str = "workouts.db";
pub const SERVER_ADDR: &str = "127.0.0.1:3000";
pub const PUBLIC_DIR: &str = "public";
