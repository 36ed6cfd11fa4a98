// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use waste_finder::config::Config;
use waste_finder::db::MongoDb;
use waste_finder::routes::create_router;
use waste_finder::AppState;

/// Check if a live MongoDB is available via environment variable.
#[allow(dead_code)]
pub fn mongodb_available() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Skip test with message if no live MongoDB is available.
#[macro_export]
macro_rules! require_mongodb {
    () => {
        if !crate::common::mongodb_available() {
            eprintln!("⚠️  Skipping: DATABASE_URL not set");
            return;
        }
    };
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> MongoDb {
    MongoDb::new_mock()
}

/// Create a test app with an offline mock database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// Create a test app backed by a live MongoDB with its own database name,
/// so every test run starts from empty collections.
#[allow(dead_code)]
pub async fn create_live_test_app(db_name: &str) -> (axum::Router, Arc<AppState>) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for live tests");
    let db = MongoDb::connect(&url, db_name)
        .await
        .expect("Failed to connect to MongoDB");

    let mut config = Config::test_default();
    config.database_url = Some(url);
    config.database_name = db_name.to_string();

    let state = Arc::new(AppState { config, db });

    (create_router(state.clone()), state)
}

/// Generate a unique database name for test isolation.
#[allow(dead_code)]
pub fn unique_db_name(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}
