use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use crate::youtube::DEFAULT_API_BASE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REGION_CODE: &str = "US";
const DEFAULT_FEED_MAX_RESULTS: u32 = 50;
const DEFAULT_RECOMMENDED_MAX_RESULTS: u32 = 45;
const DEFAULT_COMMENTS_MAX_RESULTS: u32 = 50;

// Data API list endpoints accept 1..=50 (commentThreads allows up to 100)
const MAX_VIDEO_RESULTS: u32 = 50;
const MAX_COMMENT_RESULTS: u32 = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bind_addr: SocketAddr,
    pub region_code: String,
    pub api_base: String,
    pub feed_max_results: u32,
    pub recommended_max_results: u32,
    pub comments_max_results: u32,
    pub log_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("API_KEY"))?;

        let region_code = lookup("REGION_CODE").unwrap_or_else(|| DEFAULT_REGION_CODE.to_string());
        if region_code.len() != 2 || !region_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid { name: "REGION_CODE", value: region_code });
        }

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid { name: "LOG_FORMAT", value: other.to_string() })
            }
        };

        Ok(Config {
            api_key,
            bind_addr: parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            region_code: region_code.to_ascii_uppercase(),
            api_base: lookup("YOUTUBE_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            feed_max_results: max_results(&lookup, "FEED_MAX_RESULTS", DEFAULT_FEED_MAX_RESULTS, MAX_VIDEO_RESULTS)?,
            recommended_max_results: max_results(
                &lookup,
                "RECOMMENDED_MAX_RESULTS",
                DEFAULT_RECOMMENDED_MAX_RESULTS,
                MAX_VIDEO_RESULTS,
            )?,
            comments_max_results: max_results(
                &lookup,
                "COMMENTS_MAX_RESULTS",
                DEFAULT_COMMENTS_MAX_RESULTS,
                MAX_COMMENT_RESULTS,
            )?,
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()).map(PathBuf::from),
            log_format,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}

fn max_results(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u32,
    limit: u32,
) -> Result<u32, ConfigError> {
    let value = parse_or(lookup, name, Some(default))?;
    if value == 0 || value > limit {
        return Err(ConfigError::Invalid { name, value: value.to_string() });
    }
    Ok(value)
}
