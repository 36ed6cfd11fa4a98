// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MongoDB client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Stations (list/filter, nearby scan source, inserts)
//! - Recommendations (list, inserts)
//! - Recommendation feedback (inserts)
//!
//! Every operation is a direct pass-through to the driver's find/insert
//! primitives; there is no caching or retry layer.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Recommendation, RecommendationFeedback, Station};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};
use serde::{de::DeserializeOwned, Serialize};

/// MongoDB database client.
#[derive(Clone)]
pub struct MongoDb {
    database: Option<Database>,
}

impl MongoDb {
    /// Create a new MongoDB client.
    ///
    /// The driver connects lazily; a bad URL surfaces on the first query.
    pub async fn connect(url: &str, database_name: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        tracing::info!(database = database_name, "Connected to MongoDB");

        Ok(Self {
            database: Some(client.database(database_name)),
        })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { database: None }
    }

    /// Whether a database handle is present.
    pub fn is_connected(&self) -> bool {
        self.database.is_some()
    }

    /// Helper to get the database or return an error if offline.
    fn get_database(&self) -> Result<&Database, AppError> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// List collection names, for the /test diagnostics endpoint.
    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.get_database()?
            .list_collection_names()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    fn stations(&self) -> Result<Collection<Station>, AppError> {
        Ok(self.get_database()?.collection(collections::STATIONS))
    }

    fn recommendations(&self) -> Result<Collection<Recommendation>, AppError> {
        Ok(self.get_database()?.collection(collections::RECOMMENDATIONS))
    }

    fn feedback(&self) -> Result<Collection<RecommendationFeedback>, AppError> {
        Ok(self.get_database()?.collection(collections::FEEDBACK))
    }

    // ─── Station Operations ──────────────────────────────────────

    /// List stations matching a filter document, up to `limit`.
    pub async fn list_stations(
        &self,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Station>, AppError> {
        self.stations()?
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Fetch every station. The nearby scan sorts these in memory.
    pub async fn all_stations(&self) -> Result<Vec<Station>, AppError> {
        self.stations()?
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a station and return the stored document.
    pub async fn insert_station(&self, station: &Station) -> Result<Station, AppError> {
        insert_and_fetch(&self.stations()?, station).await
    }

    /// Number of station documents.
    pub async fn station_count(&self) -> Result<u64, AppError> {
        self.stations()?
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Recommendation Operations ───────────────────────────────

    /// List recommendations, up to `limit`.
    pub async fn list_recommendations(&self, limit: i64) -> Result<Vec<Recommendation>, AppError> {
        self.recommendations()?
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a recommendation and return the stored document.
    pub async fn insert_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<Recommendation, AppError> {
        insert_and_fetch(&self.recommendations()?, recommendation).await
    }

    /// Number of recommendation documents.
    pub async fn recommendation_count(&self) -> Result<u64, AppError> {
        self.recommendations()?
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a feedback record and return the stored document.
    pub async fn insert_feedback(
        &self,
        feedback: &RecommendationFeedback,
    ) -> Result<RecommendationFeedback, AppError> {
        insert_and_fetch(&self.feedback()?, feedback).await
    }
}

/// Insert a document, then re-fetch it by the inserted id so the caller gets
/// the stored shape back (including `_id`).
async fn insert_and_fetch<T>(collection: &Collection<T>, value: &T) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    let inserted = collection
        .insert_one(value)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let id = inserted
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::Database("Insert did not return an object id".to_string()))?;

    collection
        .find_one(doc! { "_id": id })
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .ok_or_else(|| AppError::Database("Inserted document not found".to_string()))
}
