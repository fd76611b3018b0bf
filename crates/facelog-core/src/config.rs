//! Configuration module
//!
//! Environment-based configuration for the service. A `.env` file is loaded
//! first when present, then individual variables override the defaults.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite:attendance.db";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_PUBLIC_BASE_URL: &str = "/static";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Service configuration
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    database_url: String,
    static_dir: String,
    public_base_url: String,
    max_upload_bytes: usize,
    face_model_path: Option<String>,
    environment: String,
}

impl Config {
    /// Construct a configuration directly, bypassing the environment.
    /// Useful for tests and for embedding the service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        server_port: u16,
        database_url: impl Into<String>,
        static_dir: impl Into<String>,
        public_base_url: impl Into<String>,
        max_upload_bytes: usize,
        face_model_path: Option<String>,
        environment: impl Into<String>,
    ) -> Self {
        Config {
            server_port,
            database_url: database_url.into(),
            static_dir: static_dir.into(),
            public_base_url: public_base_url.into(),
            max_upload_bytes,
            face_model_path,
            environment: environment.into(),
        }
    }

    /// Load configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = match env::var("SERVER_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT '{}': {}", v, e))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(v) => v
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("Invalid MAX_UPLOAD_BYTES '{}': {}", v, e))?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Config {
            server_port,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()),
            max_upload_bytes,
            face_model_path: env::var("FACE_MODEL_PATH").ok(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Root directory for publicly served files; artifacts live under
    /// `{static_dir}/uploads`.
    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    /// Base URL prefix under which `static_dir` is served to clients.
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Path to the SeetaFace model file; detection runs degraded when unset.
    pub fn face_model_path(&self) -> Option<&str> {
        self.face_model_path.as_deref()
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production" || self.environment == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them to defaults-only assertions
    // so they stay order-independent.
    #[test]
    fn test_defaults() {
        let config = Config::new(
            DEFAULT_SERVER_PORT,
            DEFAULT_DATABASE_URL,
            DEFAULT_STATIC_DIR,
            DEFAULT_PUBLIC_BASE_URL,
            DEFAULT_MAX_UPLOAD_BYTES,
            None,
            "development",
        );
        assert_eq!(config.server_port(), 5000);
        assert_eq!(config.database_url(), "sqlite:attendance.db");
        assert_eq!(config.public_base_url(), "/static");
        assert!(config.face_model_path().is_none());
        assert!(!config.is_production());
    }
}
