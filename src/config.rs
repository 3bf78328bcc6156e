//! Node configuration loaded from environment variables and command-line flags.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

use crate::search::types::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind address.
    pub bind_addr: SocketAddr,

    /// Base URL of a node serving `/internal/index/*`. `None` keeps the index in-process.
    pub index_store_url: Option<String>,

    /// Per-request timeout for the remote index store.
    pub store_timeout: Duration,

    /// `page_size` used when a search request does not set one.
    pub default_page_size: i64,

    /// Interval of the index statistics reporter. Zero disables it.
    pub stats_interval: Duration,

    pub log_level: Level,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SEARCHER_BIND`: HTTP bind address (default: "127.0.0.1:4567")
    /// - `INDEX_STORE_URL`: Remote index store base URL (default: in-process store)
    /// - `INDEX_STORE_TIMEOUT_MS`: Remote store request timeout (default: 500)
    /// - `SEARCH_PAGE_SIZE`: Default search page size (default: 10)
    /// - `STATS_INTERVAL_SECS`: Index stats reporting interval, 0 disables (default: 5)
    /// - `LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr = lookup("SEARCHER_BIND")
            .unwrap_or_else(|| "127.0.0.1:4567".to_string())
            .parse::<SocketAddr>()
            .context("SEARCHER_BIND must be an <ip>:<port> address")?;

        let index_store_url = lookup("INDEX_STORE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let store_timeout_ms: u64 = parse_or(&lookup, "INDEX_STORE_TIMEOUT_MS", 500)?;

        let default_page_size: i64 = parse_or(&lookup, "SEARCH_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if default_page_size < 1 {
            anyhow::bail!("SEARCH_PAGE_SIZE must be >= 1, got {}", default_page_size);
        }

        let stats_interval_secs: u64 = parse_or(&lookup, "STATS_INTERVAL_SECS", 5)?;

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| anyhow::anyhow!("LOG_LEVEL is not a valid level: {}", level))?,
            None => Level::INFO,
        };

        Ok(Self {
            bind_addr,
            index_store_url,
            store_timeout: Duration::from_millis(store_timeout_ms),
            default_page_size,
            stats_interval: Duration::from_secs(stats_interval_secs),
            log_level,
        })
    }

    /// Applies `--bind <addr:port>` and `--store <url>` overrides.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args.get(i + 1).context("--bind requires a value")?;
                    self.bind_addr = value
                        .parse::<SocketAddr>()
                        .context("--bind must be <ip>:<port>")?;
                    i += 2;
                }
                "--store" => {
                    let value = args.get(i + 1).context("--store requires a value")?;
                    self.index_store_url = Some(value.trim().trim_end_matches('/').to_string())
                        .filter(|url| !url.is_empty());
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is invalid ({}): {}", key, raw, e)),
        None => Ok(default),
    }
}
