// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Waste station model.

use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Station category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    Dump,
    Recycling,
    Ewaste,
    Compost,
    Hazmat,
}

impl StationType {
    /// Wire name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Dump => "dump",
            StationType::Recycling => "recycling",
            StationType::Ewaste => "ewaste",
            StationType::Compost => "compost",
            StationType::Hazmat => "hazmat",
        }
    }
}

/// Waste station location with geocoordinates and metadata.
///
/// Collection: `station`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Station {
    /// MongoDB document id (absent until inserted)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub id: Option<ObjectId>,
    /// Station name
    pub name: String,
    /// Station category
    #[serde(rename = "type")]
    pub station_type: StationType,
    /// Street address
    pub address: String,
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Longitude in [-180, 180]
    pub longitude: f64,
    /// Average rating in [0, 5]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Open hours summary
    pub hours: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    /// RFC3339 insert timestamp
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StationType::Ewaste).unwrap(),
            "\"ewaste\""
        );
        let parsed: StationType = serde_json::from_str("\"hazmat\"").unwrap();
        assert_eq!(parsed, StationType::Hazmat);
    }

    #[test]
    fn test_station_type_rejects_unknown() {
        let result: Result<StationType, _> = serde_json::from_str("\"landfill\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_station_optional_fields_default() {
        let station: Station = serde_json::from_str(
            r#"{
                "name": "GreenCycle Center",
                "type": "recycling",
                "address": "123 Elm St",
                "latitude": 37.7749,
                "longitude": -122.4194,
                "rating": null,
                "phone": null,
                "website": null,
                "hours": null
            }"#,
        )
        .unwrap();

        assert!(station.id.is_none());
        assert_eq!(station.review_count, 0);
        assert!(station.services.is_empty());
        assert_eq!(station.station_type, StationType::Recycling);
    }
}
