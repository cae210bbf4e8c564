use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use dotenvy::dotenv;

use crate::insights::dates::parse_time;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting, 0 disables
    pub rate_per_min: u32,

    pub max_payload_bytes: usize,

    /// Check-ins after this time count as late
    pub late_cutoff: NaiveTime,

    pub log_dir: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(name: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var_or(name, default)
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a valid number"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let late_cutoff = var_or("LATE_CUTOFF", "09:00");
        let late_cutoff = parse_time(&late_cutoff)
            .with_context(|| format!("LATE_CUTOFF must be HH:MM, got {late_cutoff:?}"))?;

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:8080"),
            api_prefix: var_or("API_PREFIX", "/api"),
            rate_per_min: parse_var("RATE_PER_MIN", "1000")?,
            max_payload_bytes: parse_var("MAX_PAYLOAD_BYTES", "2097152")?, // 2 MiB
            late_cutoff,
            log_dir: var_or("LOG_DIR", "logs"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_prefix: "/api".to_string(),
            rate_per_min: 1000,
            max_payload_bytes: 2 * 1024 * 1024,
            late_cutoff: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            log_dir: "logs".to_string(),
        }
    }
}
