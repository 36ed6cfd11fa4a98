// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommendation routes: listing, creation, and feedback.

use crate::error::{AppError, Result};
use crate::models::{self, FeedbackAction, Recommendation, RecommendationFeedback};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

const MAX_LIST_LIMIT: u32 = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/recommendations",
            get(list_recommendations).post(create_recommendation),
        )
        .route("/api/recommendations/feedback", post(submit_feedback))
}

#[derive(Serialize)]
pub struct RecommendationResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub station_id: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            id: recommendation.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: recommendation.title,
            description: recommendation.description,
            image: recommendation.image,
            station_id: recommendation.station_id,
            tags: recommendation.tags,
            created_at: recommendation.created_at,
        }
    }
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(default = "default_list_limit")]
    limit: u32,
}

fn default_list_limit() -> u32 {
    20
}

/// List recommendations, newest-insert order is whatever the store returns.
async fn list_recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendationsQuery>,
) -> Result<Json<Vec<RecommendationResponse>>> {
    let limit = params.limit.clamp(1, MAX_LIST_LIMIT);

    let recommendations = state.db.list_recommendations(limit as i64).await?;
    Ok(Json(
        recommendations
            .into_iter()
            .map(RecommendationResponse::from)
            .collect(),
    ))
}

// ─── Creation ────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecommendationRequest {
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub image: Option<String>,
    pub station_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateRecommendationRequest {
    fn into_recommendation(self) -> Recommendation {
        Recommendation {
            id: None,
            title: self.title,
            description: self.description,
            image: self.image,
            station_id: self.station_id,
            tags: self.tags,
            created_at: models::now_rfc3339(),
        }
    }
}

/// Create a recommendation.
async fn create_recommendation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRecommendationRequest>,
) -> Result<(StatusCode, Json<RecommendationResponse>)> {
    payload.validate()?;

    let stored = state
        .db
        .insert_recommendation(&payload.into_recommendation())
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(title = %stored.title, "Recommendation created");
    Ok((
        StatusCode::CREATED,
        Json(RecommendationResponse::from(stored)),
    ))
}

// ─── Feedback ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub item_id: String,
    pub action: FeedbackAction,
    pub reason: Option<String>,
    pub user_id: Option<String>,
    pub created_at: String,
}

impl From<RecommendationFeedback> for FeedbackResponse {
    fn from(feedback: RecommendationFeedback) -> Self {
        Self {
            id: feedback.id.map(|id| id.to_hex()).unwrap_or_default(),
            item_id: feedback.item_id,
            action: feedback.action,
            reason: feedback.reason,
            user_id: feedback.user_id,
            created_at: feedback.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub item_id: String,
    pub action: FeedbackAction,
    pub reason: Option<String>,
    pub user_id: Option<String>,
}

/// Record thumbs up/down feedback on a recommendation. The item id is an
/// unchecked reference.
async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>)> {
    let feedback = RecommendationFeedback {
        id: None,
        item_id: payload.item_id,
        action: payload.action,
        reason: payload.reason,
        user_id: payload.user_id,
        created_at: models::now_rfc3339(),
    };

    let stored = state
        .db
        .insert_feedback(&feedback)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(item_id = %stored.item_id, "Feedback recorded");
    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(stored))))
}
