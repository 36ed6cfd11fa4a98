// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Station routes: listing, creation, and nearby lookup.

use crate::error::{AppError, Result};
use crate::geo;
use crate::models::{self, Station, StationType};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

const MAX_LIST_LIMIT: u32 = 200;
const MAX_NEARBY_LIMIT: u32 = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stations", get(list_stations).post(create_station))
        .route("/api/stations/nearby", get(nearby_stations))
}

/// Station as returned by the API: `_id` renamed to `id` (hex string).
#[derive(Serialize)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<String>,
    pub services: Vec<String>,
    pub created_at: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: station.name,
            station_type: station.station_type,
            address: station.address,
            latitude: station.latitude,
            longitude: station.longitude,
            rating: station.rating,
            review_count: station.review_count,
            phone: station.phone,
            website: station.website,
            hours: station.hours,
            services: station.services,
            created_at: station.created_at,
        }
    }
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    /// Filter by station type
    #[serde(rename = "type")]
    station_type: Option<StationType>,
    /// Case-insensitive match on name or address
    query: Option<String>,
    #[serde(default = "default_list_limit")]
    limit: u32,
    lat: Option<f64>,
    lng: Option<f64>,
    /// Radius filter in km (approx, simple bbox)
    radius_km: Option<f64>,
}

fn default_list_limit() -> u32 {
    50
}

/// Build the MongoDB filter document for a station listing query.
fn station_filter(params: &StationsQuery) -> Document {
    let mut filter = Document::new();

    if let Some(station_type) = params.station_type {
        filter.insert("type", station_type.as_str());
    }

    if let Some(query) = params.query.as_deref() {
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": query, "$options": "i" } },
                doc! { "address": { "$regex": query, "$options": "i" } },
            ],
        );
    }

    // Bounding box from a rough degrees conversion, only when the full
    // center+radius triple is present and the radius is non-zero.
    if let (Some(lat), Some(lng), Some(radius_km)) = (params.lat, params.lng, params.radius_km) {
        if radius_km != 0.0 {
            let delta = geo::degree_window(radius_km);
            filter.insert("latitude", doc! { "$gte": lat - delta, "$lte": lat + delta });
            filter.insert("longitude", doc! { "$gte": lng - delta, "$lte": lng + delta });
        }
    }

    filter
}

/// List stations with optional type, text, and bounding-box filters.
async fn list_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StationsQuery>,
) -> Result<Json<Vec<StationResponse>>> {
    tracing::debug!(
        station_type = ?params.station_type,
        query = ?params.query,
        limit = params.limit,
        "Listing stations"
    );

    let limit = params.limit.clamp(1, MAX_LIST_LIMIT);
    let filter = station_filter(&params);

    let stations = state.db.list_stations(filter, limit as i64).await?;
    Ok(Json(stations.into_iter().map(StationResponse::from).collect()))
}

// ─── Creation ────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStationRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    pub phone: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub hours: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl CreateStationRequest {
    fn into_station(self) -> Station {
        Station {
            id: None,
            name: self.name,
            station_type: self.station_type,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            rating: self.rating,
            review_count: self.review_count,
            phone: self.phone,
            website: self.website,
            hours: self.hours,
            services: self.services,
            created_at: models::now_rfc3339(),
        }
    }
}

/// Create a station. Insert failures surface as 400 with the error string.
async fn create_station(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<StationResponse>)> {
    payload.validate()?;

    let station = payload.into_station();
    let stored = state
        .db
        .insert_station(&station)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(name = %stored.name, "Station created");
    Ok((StatusCode::CREATED, Json(StationResponse::from(stored))))
}

// ─── Nearby Lookup ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    lat: f64,
    lng: f64,
    #[serde(default = "default_nearby_limit")]
    limit: u32,
}

fn default_nearby_limit() -> u32 {
    10
}

/// Rough nearest lookup: full scan sorted by squared planar distance.
async fn nearby_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyQuery>,
) -> Result<Json<Vec<StationResponse>>> {
    tracing::debug!(
        lat = params.lat,
        lng = params.lng,
        limit = params.limit,
        "Nearby station lookup"
    );

    let limit = params.limit.clamp(1, MAX_NEARBY_LIMIT) as usize;
    let stations = state.db.all_stations().await?;
    let nearest = geo::nearest(stations, params.lat, params.lng, limit);

    Ok(Json(nearest.into_iter().map(StationResponse::from).collect()))
}
