use std::{fmt, net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PANEL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SYNC_LEASE_TTL_SECS: u64 = 900;
const DEFAULT_RESOURCE_POLL_CONCURRENCY: usize = 8;
const DEFAULT_RESOURCE_POLL_TIMEOUT_SECS: u64 = 5;
const MAX_SYNC_LEASE_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const MAX_TIMEOUT_SECS: u64 = 60 * 60;

/// Connection settings for the Pterodactyl panel.
#[derive(Clone)]
pub struct PanelConfig {
    /// Panel base URL without a trailing slash
    pub url: String,
    /// Application API key used for users, servers and account creation
    pub api_key: String,
    /// Client API key used for live resource usage
    pub client_api_key: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("client_api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    pub panel: PanelConfig,

    /// Cron expression for the scheduled sync, disabled when unset
    pub sync_schedule: Option<String>,
    pub sync_lease_ttl: Duration,

    pub resource_poll_concurrency: usize,
    pub resource_poll_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("panel", &self.panel)
            .field("sync_schedule", &self.sync_schedule)
            .field("sync_lease_ttl", &self.sync_lease_ttl)
            .field("resource_poll_concurrency", &self.resource_poll_concurrency)
            .field("resource_poll_timeout", &self.resource_poll_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let panel_url = require("PTERODACTYL_PANEL_URL")?;
        url::Url::parse(&panel_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "PTERODACTYL_PANEL_URL".to_string(),
            reason: e.to_string(),
        })?;
        let api_key = require("PTERODACTYL_API_KEY")?;
        let client_api_key = get("PTERODACTYL_CLIENT_API_KEY").unwrap_or_else(|| api_key.clone());

        let bind_addr = match get("BIND_ADDR") {
            Some(addr) => parse_var("BIND_ADDR", &addr)?,
            None => {
                let port = match get("PORT") {
                    Some(port) => parse_var::<u16>("PORT", &port)?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let resource_poll_concurrency = parse_or(
            &get,
            "RESOURCE_POLL_CONCURRENCY",
            DEFAULT_RESOURCE_POLL_CONCURRENCY,
        )?;
        if resource_poll_concurrency == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "RESOURCE_POLL_CONCURRENCY".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_addr,
            panel: PanelConfig {
                url: panel_url.trim_end_matches('/').to_string(),
                api_key,
                client_api_key,
                request_timeout: parse_secs(
                    &get,
                    "PANEL_REQUEST_TIMEOUT_SECS",
                    DEFAULT_PANEL_TIMEOUT_SECS,
                    MAX_TIMEOUT_SECS,
                )?,
            },
            sync_schedule: get("SYNC_SCHEDULE"),
            sync_lease_ttl: parse_secs(
                &get,
                "SYNC_LEASE_TTL_SECS",
                DEFAULT_SYNC_LEASE_TTL_SECS,
                MAX_SYNC_LEASE_TTL_SECS,
            )?,
            resource_poll_concurrency,
            resource_poll_timeout: parse_secs(
                &get,
                "RESOURCE_POLL_TIMEOUT_SECS",
                DEFAULT_RESOURCE_POLL_TIMEOUT_SECS,
                MAX_TIMEOUT_SECS,
            )?,
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_or<T>(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match get(name) {
        Some(value) => parse_var(name, &value),
        None => Ok(default),
    }
}

/// Parses a whole number of seconds that must lie within `1..=max`.
fn parse_secs(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
    max: u64,
) -> Result<Duration, ConfigError> {
    let secs = parse_or(get, name, default)?;
    if !(1..=max).contains(&secs) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("must be between 1 and {} seconds", max),
        });
    }

    Ok(Duration::from_secs(secs))
}
