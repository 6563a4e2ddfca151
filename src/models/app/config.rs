use anyhow::{Context, Result};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; WebBoost/0.1; +https://github.com/webboost)";

#[derive(Debug, Clone, PartialEq)]
pub struct LighthouseSettings {
    pub binary: String,
    pub timeout: Duration,
}

/// Budgets for the per-category collection tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSettings {
    pub category_timeout: Duration,
    /// `None` keeps the Lighthouse probe off.
    pub lighthouse: Option<LighthouseSettings>,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        CollectionSettings {
            category_timeout: Duration::from_secs(10),
            lighthouse: None,
        }
    }
}

impl CollectionSettings {
    /// The performance category waits for Lighthouse when it is enabled.
    pub fn performance_timeout(&self) -> Duration {
        match &self.lighthouse {
            Some(lighthouse) => lighthouse.timeout.max(self.category_timeout),
            None => self.category_timeout,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub debug: bool,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub collection: CollectionSettings,
    pub report_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            debug: false,
            fetch_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            collection: CollectionSettings::default(),
            report_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads `WEBBOOST_*` variables, loading `.env` first if there is one.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = AppConfig::default();

        let lighthouse = if flag(lookup("WEBBOOST_LIGHTHOUSE")) {
            Some(LighthouseSettings {
                binary: lookup("WEBBOOST_LIGHTHOUSE_BIN").unwrap_or_else(|| "lighthouse".to_string()),
                timeout: Duration::from_secs(parse_or(&lookup, "WEBBOOST_LIGHTHOUSE_TIMEOUT_SECS", 60)?),
            })
        } else {
            None
        };

        Ok(AppConfig {
            bind_addr: lookup("WEBBOOST_BIND_ADDR").unwrap_or(defaults.bind_addr),
            debug: flag(lookup("WEBBOOST_DEBUG")),
            fetch_timeout: Duration::from_secs(parse_or(&lookup, "WEBBOOST_FETCH_TIMEOUT_SECS", 30)?),
            user_agent: lookup("WEBBOOST_USER_AGENT").unwrap_or(defaults.user_agent),
            collection: CollectionSettings {
                category_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "WEBBOOST_CATEGORY_TIMEOUT_SECS",
                    10,
                )?),
                lighthouse,
            },
            report_dir: lookup("WEBBOOST_REPORT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
