//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup. The database connection is optional
//! so the server can come up and report a missing database via /test.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string. None means the server runs without a
    /// database and data endpoints report errors.
    pub database_url: Option<String>,
    /// MongoDB database name
    pub database_name: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8000,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "waste_finder".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            database_url: None,
            database_name: "waste_finder_test".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8000,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
