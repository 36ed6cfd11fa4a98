// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Planar distance helpers for station lookup.
//!
//! Deliberately naive: squared-Euclidean distance over raw degrees and a
//! fixed degrees-per-kilometer conversion. Good enough for ranking stations
//! within a metro area; not a geodesic.

use crate::models::Station;

/// Rough conversion at mid latitudes.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Half-width in degrees of the bounding box for a radius in kilometers.
pub fn degree_window(radius_km: f64) -> f64 {
    radius_km / KM_PER_DEGREE
}

/// Squared planar distance between two lat/lng points, in degrees squared.
pub fn squared_distance(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let dlat = lat_a - lat_b;
    let dlng = lng_a - lng_b;
    dlat * dlat + dlng * dlng
}

/// Sort stations by squared distance to the query point, ascending, and
/// truncate to `limit`. The sort is stable, so ties keep their fetch order.
pub fn nearest(mut stations: Vec<Station>, lat: f64, lng: f64, limit: usize) -> Vec<Station> {
    stations.sort_by(|a, b| {
        squared_distance(a.latitude, a.longitude, lat, lng)
            .total_cmp(&squared_distance(b.latitude, b.longitude, lat, lng))
    });
    stations.truncate(limit);
    stations
}
