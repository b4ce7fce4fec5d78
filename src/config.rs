use anyhow::{anyhow, bail, Result};
use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::info;

pub struct Config {
    pub api_base_url: String,
    pub debounce: Duration,
    pub min_query_len: usize,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url: String = try_load(&lookup, "API_BASE_URL", "http://localhost:5000")?;

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url)?,
            debounce: Duration::from_millis(try_load(&lookup, "SEARCH_DEBOUNCE_MS", "300")?),
            min_query_len: try_load(&lookup, "SEARCH_MIN_QUERY_LEN", "3")?,
            request_timeout: Duration::from_secs(try_load(&lookup, "API_TIMEOUT_SECS", "30")?),
        })
    }
}

fn try_load<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!("API_BASE_URL must be an http(s) URL, got {raw:?}");
    }
    Ok(trimmed.to_string())
}
