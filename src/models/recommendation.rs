// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recommendation and feedback models.

use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recommendation item shown in the app drawer.
///
/// Collection: `recommendation`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: Option<String>,
    /// Image URL
    pub image: Option<String>,
    /// Related station id (unchecked reference)
    pub station_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// RFC3339 insert timestamp
    #[serde(default)]
    pub created_at: String,
}

/// Thumbs up/down on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackAction {
    Up,
    Down,
}

/// Quick feedback on recommendations.
///
/// Collection: `recommendationfeedback`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationFeedback {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub id: Option<ObjectId>,
    pub item_id: String,
    pub action: FeedbackAction,
    pub reason: Option<String>,
    pub user_id: Option<String>,
    /// RFC3339 insert timestamp
    #[serde(default)]
    pub created_at: String,
}
