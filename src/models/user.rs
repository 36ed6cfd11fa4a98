//! User profile model.
//!
//! No endpoint reads or writes users yet; the type exists for the /schema
//! listing and future account features.

use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User profile.
///
/// Collection: `user`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub id: Option<ObjectId>,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Home city
    pub city: Option<String>,
    /// Account status
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
