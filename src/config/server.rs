use crate::core::{AppError, Result};
use actix_cors::Cors;
use actix_web::http::{Method, Uri};
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Single origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: num_cpus::get() * 2, // 2x CPU cores for I/O-bound workload
            cors_allowed_origin: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?;

        let mut config = Self::new(host, port);

        if let Ok(workers) = env::var("SERVER_WORKERS") {
            config.workers = workers
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?;
        }

        config.cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty());

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject an origin that `Cors` would refuse to build with
    pub fn validate_cors(&self) -> Result<()> {
        match self.cors_allowed_origin.as_deref() {
            Some("*") => Err(AppError::configuration(
                "CORS_ALLOWED_ORIGIN must be a single origin; leave it unset to allow any",
            )),
            Some(origin) if origin.parse::<Uri>().is_err() => Err(AppError::configuration(
                format!("Invalid CORS_ALLOWED_ORIGIN: {}", origin),
            )),
            _ => Ok(()),
        }
    }

    /// Read-only CORS policy: GET and OPTIONS, no credentials
    pub fn cors(&self) -> Cors {
        let cors = Cors::default()
            .allowed_methods([Method::GET, Method::OPTIONS])
            .allow_any_header()
            .max_age(3600);

        match &self.cors_allowed_origin {
            Some(origin) => cors.allowed_origin(origin),
            None => cors.allow_any_origin(),
        }
    }
}
