// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Stored-document models, one type per MongoDB collection.

pub mod recommendation;
pub mod station;
pub mod user;

pub use recommendation::{FeedbackAction, Recommendation, RecommendationFeedback};
pub use station::{Station, StationType};
pub use user::User;

use chrono::{SecondsFormat, Utc};

/// Timestamp stamped onto documents at insert time.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
