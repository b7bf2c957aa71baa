//! Configuration module
//!
//! Typed configuration for the backend and edge processes. Values are read
//! once at start-up and handed to each component explicitly; nothing reads
//! the environment afterwards.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_BACKEND_URL, DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE_MB};

const BACKEND_PORT: u16 = 5000;
const EDGE_PORT: u16 = 3000;
const RELAY_TIMEOUT_SECS: u64 = 30;
const EDGE_MAX_BODY_MB: usize = 64;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Base configuration shared by both processes
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// Server-wide cap on in-flight requests
    pub http_concurrency_limit: usize,
}

/// Storage backend configuration
#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base: BaseConfig,
    /// Durable storage root for accepted files
    pub upload_dir: PathBuf,
    /// Spool directory for files still under validation
    pub temp_dir: PathBuf,
    pub max_file_size_bytes: usize,
    pub max_files: usize,
}

/// Edge relay configuration
#[derive(Clone, Debug)]
pub struct EdgeConfig {
    pub base: BaseConfig,
    /// Backend base URL; the upload path is appended to it
    pub backend_url: String,
    /// Spool directory for captured file parts
    pub temp_dir: PathBuf,
    pub relay_timeout: Duration,
    pub max_body_bytes: usize,
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn mib_to_bytes(mib: usize, key: &str) -> Result<usize, anyhow::Error> {
    mib.checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("{} is too large", key))
}

impl BaseConfig {
    fn from_lookup<F>(lookup: &F, default_port: u16) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => default_port,
        };

        Ok(BaseConfig {
            server_port,
            cors_origins,
            environment,
            http_concurrency_limit: parse_or(
                lookup("HTTP_CONCURRENCY_LIMIT"),
                HTTP_CONCURRENCY_LIMIT,
            )
            .max(1),
        })
    }

    /// Check if the process is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.environment)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        Ok(())
    }
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = BaseConfig::from_lookup(&lookup, BACKEND_PORT)?;

        let max_file_size_bytes = mib_to_bytes(
            parse_or(lookup("MAX_FILE_SIZE_MB"), DEFAULT_MAX_FILE_SIZE_MB),
            "MAX_FILE_SIZE_MB",
        )?;

        let config = BackendConfig {
            base,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            temp_dir: lookup("UPLOAD_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("pixvault-api")),
            max_file_size_bytes,
            max_files: parse_or(lookup("MAX_FILES"), DEFAULT_MAX_FILES),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.base.validate()?;

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than zero"));
        }
        if self.max_files == 0 {
            return Err(anyhow::anyhow!("MAX_FILES must be greater than zero"));
        }
        if self.upload_dir == self.temp_dir {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR and UPLOAD_TEMP_DIR must be different directories"
            ));
        }

        Ok(())
    }
}

impl EdgeConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = BaseConfig::from_lookup(&lookup, EDGE_PORT)?;

        let max_body_bytes = mib_to_bytes(
            parse_or(lookup("EDGE_MAX_BODY_MB"), EDGE_MAX_BODY_MB),
            "EDGE_MAX_BODY_MB",
        )?;

        let config = EdgeConfig {
            base,
            backend_url: lookup("BACKEND_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            temp_dir: lookup("EDGE_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("pixvault-edge")),
            relay_timeout: Duration::from_secs(parse_or(
                lookup("RELAY_TIMEOUT_SECS"),
                RELAY_TIMEOUT_SECS,
            )),
            max_body_bytes,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.base.validate()?;

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "BACKEND_URL must start with http:// or https://"
            ));
        }
        if self.relay_timeout.is_zero() {
            return Err(anyhow::anyhow!("RELAY_TIMEOUT_SECS must be greater than zero"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("EDGE_MAX_BODY_MB must be greater than zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn backend_defaults() {
        let config = BackendConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base.server_port, 5000);
        assert_eq!(config.max_files, 10);
        assert_eq!(config.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
    }

    #[test]
    fn edge_defaults_point_at_local_backend() {
        let config = EdgeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base.server_port, 3000);
        assert_eq!(config.backend_url, "http://localhost:5000");
        assert_eq!(config.relay_timeout, Duration::from_secs(30));
    }

    #[test]
    fn backend_url_trailing_slash_is_trimmed() {
        let config =
            EdgeConfig::from_lookup(lookup_from(&[("BACKEND_URL", "http://storage:9000/")]))
                .unwrap();
        assert_eq!(config.backend_url, "http://storage:9000");
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            ("MAX_FILES", "lots"),
            ("MAX_FILE_SIZE_MB", "-3"),
        ]))
        .unwrap();
        assert_eq!(config.max_files, 10);
        assert_eq!(config.max_file_size_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(BackendConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn wildcard_cors_refused_in_production() {
        let result = EdgeConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "production")]));
        assert!(result.is_err());

        let result = EdgeConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("CORS_ORIGINS", "https://gallery.example.com"),
        ]));
        assert!(result.is_ok());
    }

    #[test]
    fn concurrency_limit_is_at_least_one() {
        let config =
            BackendConfig::from_lookup(lookup_from(&[("HTTP_CONCURRENCY_LIMIT", "0")])).unwrap();
        assert_eq!(config.base.http_concurrency_limit, 1);
    }

    #[test]
    fn oversized_megabyte_values_are_an_error() {
        let err = BackendConfig::from_lookup(lookup_from(&[(
            "MAX_FILE_SIZE_MB",
            "18446744073709551615",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("MAX_FILE_SIZE_MB is too large"));

        let err = EdgeConfig::from_lookup(lookup_from(&[("EDGE_MAX_BODY_MB", "17592186044416")]))
            .unwrap_err();
        assert!(err.to_string().contains("EDGE_MAX_BODY_MB is too large"));
    }

    #[test]
    fn non_http_backend_url_rejected() {
        let result = EdgeConfig::from_lookup(lookup_from(&[("BACKEND_URL", "ftp://nope")]));
        assert!(result.is_err());
    }

    #[test]
    fn zero_caps_rejected() {
        assert!(BackendConfig::from_lookup(lookup_from(&[("MAX_FILES", "0")])).is_err());
        assert!(EdgeConfig::from_lookup(lookup_from(&[("RELAY_TIMEOUT_SECS", "0")])).is_err());
    }
}
