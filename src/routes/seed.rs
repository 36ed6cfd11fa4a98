// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sample-data seeding endpoint.

use crate::error::Result;
use crate::models::{self, Recommendation, Station, StationType};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/seed", post(seed_sample_data))
}

#[derive(Serialize)]
pub struct SeedResult {
    pub inserted: u64,
}

/// Seed a few stations and recommendations if collections are empty.
///
/// Idempotent: a second call finds non-empty collections and inserts nothing.
async fn seed_sample_data(State(state): State<Arc<AppState>>) -> Result<Json<SeedResult>> {
    let mut inserted = 0;

    if state.db.station_count().await? == 0 {
        for station in sample_stations() {
            state.db.insert_station(&station).await?;
            inserted += 1;
        }
    }

    if state.db.recommendation_count().await? == 0 {
        for recommendation in sample_recommendations() {
            state.db.insert_recommendation(&recommendation).await?;
            inserted += 1;
        }
    }

    tracing::info!(inserted, "Seed complete");
    Ok(Json(SeedResult { inserted }))
}

fn station(
    name: &str,
    station_type: StationType,
    address: &str,
    latitude: f64,
    longitude: f64,
    rating: f64,
    review_count: u32,
    services: &[&str],
) -> Station {
    Station {
        id: None,
        name: name.to_string(),
        station_type,
        address: address.to_string(),
        latitude,
        longitude,
        rating: Some(rating),
        review_count,
        phone: None,
        website: None,
        hours: None,
        services: services.iter().map(|s| s.to_string()).collect(),
        created_at: models::now_rfc3339(),
    }
}

fn sample_stations() -> Vec<Station> {
    vec![
        station(
            "GreenCycle Center",
            StationType::Recycling,
            "123 Elm St",
            37.7749,
            -122.4194,
            4.7,
            128,
            &["plastic", "paper", "metal"],
        ),
        station(
            "City Dump Yard",
            StationType::Dump,
            "45 Industrial Rd",
            37.78,
            -122.41,
            4.1,
            63,
            &["bulk", "construction"],
        ),
        station(
            "Tech E-Waste Depot",
            StationType::Ewaste,
            "9 Silicon Ave",
            37.76,
            -122.42,
            4.8,
            204,
            &["electronics", "batteries"],
        ),
    ]
}

fn sample_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: None,
            title: "Recycle plastics today".to_string(),
            description: Some("Drop-off at GreenCycle before 6pm".to_string()),
            image: None,
            station_id: None,
            tags: vec!["recycling".to_string(), "plastic".to_string()],
            created_at: models::now_rfc3339(),
        },
        Recommendation {
            id: None,
            title: "Dispose e-waste safely".to_string(),
            description: Some("Tech Depot accepts laptops".to_string()),
            image: None,
            station_id: None,
            tags: vec!["ewaste".to_string()],
            created_at: models::now_rfc3339(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_shape() {
        let stations = sample_stations();
        assert_eq!(stations.len(), 3);
        assert!(stations
            .iter()
            .all(|s| (-90.0..=90.0).contains(&s.latitude)));

        let recommendations = sample_recommendations();
        assert_eq!(recommendations.len(), 2);
    }
}
