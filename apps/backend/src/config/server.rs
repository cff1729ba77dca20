use super::env::{opt_var, parse_var_or, var_or};
use crate::error::AppError;

pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: var_or("BACKEND_HOST", "0.0.0.0"),
            port: parse_var_or("BACKEND_PORT", 3001u16)?,
            cors_origins: parse_origins(opt_var("CORS_ALLOWED_ORIGINS").as_deref()),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Comma-separated http(s) origins; empty, `null` and non-http entries are
/// dropped. Nothing valid falls back to the local dev origins.
pub fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}
