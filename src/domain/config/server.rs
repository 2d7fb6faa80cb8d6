use std::{path::PathBuf, str::FromStr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploaded_files";
const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_MAX_POINTS: usize = 1_000_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    /// Size of the write buffer used when persisting uploads.
    pub chunk_size: usize,
    pub max_upload_bytes: usize,
    pub max_points: usize,
    /// Treat the first row of a sheet as column headers.
    pub header_row: bool,
    /// `None` means every origin is allowed.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_points: DEFAULT_MAX_POINTS,
            header_row: true,
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let chunk_size = parse_or(&lookup, "UPLOAD_CHUNK_SIZE", defaults.chunk_size)?;
        if chunk_size == 0 {
            return Err(ConfigError::Zero {
                key: "UPLOAD_CHUNK_SIZE",
            });
        }

        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;
        if max_upload_bytes == 0 {
            return Err(ConfigError::Zero {
                key: "MAX_UPLOAD_BYTES",
            });
        }

        let max_points = parse_or(&lookup, "MAX_POINTS", defaults.max_points)?;
        if max_points == 0 {
            return Err(ConfigError::Zero { key: "MAX_POINTS" });
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            chunk_size,
            max_upload_bytes,
            max_points,
            header_row: parse_or(&lookup, "HEADER_ROW", defaults.header_row)?,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
