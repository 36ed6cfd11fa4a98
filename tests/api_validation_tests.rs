// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn station_body(latitude: f64, longitude: f64) -> String {
    format!(
        r#"{{
            "name": "GreenCycle Center",
            "type": "recycling",
            "address": "123 Elm St",
            "latitude": {},
            "longitude": {}
        }}"#,
        latitude, longitude
    )
}

async fn post_json(app: axum::Router, uri: &str, body: String) -> StatusCode {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}

#[tokio::test]
async fn test_create_station_rejects_out_of_range_latitude() {
    let (app, _state) = common::create_test_app();
    let status = post_json(app, "/api/stations", station_body(120.0, -122.4)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_station_rejects_out_of_range_longitude() {
    let (app, _state) = common::create_test_app();
    let status = post_json(app, "/api/stations", station_body(37.7, -200.0)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_station_rejects_unknown_type() {
    let (app, _state) = common::create_test_app();
    let body = r#"{
        "name": "GreenCycle Center",
        "type": "landfill",
        "address": "123 Elm St",
        "latitude": 37.7,
        "longitude": -122.4
    }"#;
    let status = post_json(app, "/api/stations", body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_station_rejects_missing_name() {
    let (app, _state) = common::create_test_app();
    let body = r#"{
        "type": "recycling",
        "address": "123 Elm St",
        "latitude": 37.7,
        "longitude": -122.4
    }"#;
    let status = post_json(app, "/api/stations", body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_station_rejects_out_of_range_rating() {
    let (app, _state) = common::create_test_app();
    let body = r#"{
        "name": "GreenCycle Center",
        "type": "recycling",
        "address": "123 Elm St",
        "latitude": 37.7,
        "longitude": -122.4,
        "rating": 9.5
    }"#;
    let status = post_json(app, "/api/stations", body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_feedback_rejects_unknown_action() {
    let (app, _state) = common::create_test_app();
    let body = r#"{"item_id": "abc123", "action": "sideways"}"#;
    let status = post_json(app, "/api/recommendations/feedback", body.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_nearby_requires_coordinates() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/stations/nearby?lat=37.7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_stations_rejects_unknown_type_param() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/stations?type=landfill")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
