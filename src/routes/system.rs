// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Diagnostics and schema endpoints for operators and tooling.

use crate::db::collections;
use crate::models::{Recommendation, RecommendationFeedback, Station, User};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/test", get(test_database))
        .route("/schema", get(get_schema))
}

// ─── Database Diagnostics ────────────────────────────────────

#[derive(Serialize)]
pub struct TestResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url_set: bool,
    pub database_name_set: bool,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Report backend and database status. Never fails: database errors are
/// folded into the report.
async fn test_database(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    let mut response = TestResponse {
        backend: "running",
        database: "not available".to_string(),
        database_url_set: std::env::var("DATABASE_URL").is_ok(),
        database_name_set: std::env::var("DATABASE_NAME").is_ok(),
        connection_status: "not connected",
        collections: vec![],
    };

    if state.db.is_connected() {
        response.connection_status = "connected";
        match state.db.collection_names().await {
            Ok(names) => {
                response.collections = names;
                response.database = "connected and working".to_string();
            }
            Err(e) => {
                let msg: String = e.to_string().chars().take(80).collect();
                response.database = format!("connected but error: {}", msg);
            }
        }
    }

    Json(response)
}

// ─── Schema Listing ──────────────────────────────────────────

#[derive(Serialize)]
pub struct SchemaEntry {
    pub name: &'static str,
    pub collection: &'static str,
    pub schema: serde_json::Value,
}

fn model_schema<T: schemars::JsonSchema>() -> serde_json::Value {
    let schema = schemars::gen::SchemaGenerator::default().into_root_schema_for::<T>();
    serde_json::to_value(schema).unwrap_or_default()
}

/// JSON Schema for each stored model, for viewers and tools.
async fn get_schema() -> Json<Vec<SchemaEntry>> {
    Json(vec![
        SchemaEntry {
            name: "User",
            collection: collections::USERS,
            schema: model_schema::<User>(),
        },
        SchemaEntry {
            name: "Station",
            collection: collections::STATIONS,
            schema: model_schema::<Station>(),
        },
        SchemaEntry {
            name: "Recommendation",
            collection: collections::RECOMMENDATIONS,
            schema: model_schema::<Recommendation>(),
        },
        SchemaEntry {
            name: "RecommendationFeedback",
            collection: collections::FEEDBACK,
            schema: model_schema::<RecommendationFeedback>(),
        },
    ])
}
