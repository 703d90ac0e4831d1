//! Centralized configuration (environment variables + defaults).

use anyhow::{bail, Context};
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `BIND_ADDR`, defaults to `0.0.0.0:3000`.
    pub bind_addr: SocketAddr,
    /// `SEED_CATALOG`: start with the three seed games (default) or empty.
    pub seed_catalog: bool,
    /// `ENABLE_SWAGGER`: mount Swagger UI at `/swagger-ui` (default on).
    pub enable_swagger: bool,
}

impl AppConfig {
    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR must be a socket address, got '{}'", bind_addr))?;

        Ok(Self {
            bind_addr,
            seed_catalog: flag(&lookup, "SEED_CATALOG", true)?,
            enable_swagger: flag(&lookup, "ENABLE_SWAGGER", true)?,
        })
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> anyhow::Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("{} must be a boolean, got '{}'", key, other),
    }
}
