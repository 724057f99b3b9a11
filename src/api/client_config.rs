use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::credentials::plotly_home;
use crate::error::{ChartError, ChartResult};

pub const DOMAIN_ENV: &str = "PLOTLY_DOMAIN";
pub const DEFAULT_DOMAIN: &str = "https://plot.ly";
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Connection settings for the publishing service.
///
/// Serializable so hosts can keep it next to their own settings; missing
/// fields take the defaults. The service's own config file spells the
/// domain `plotly_domain`, which is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_domain", alias = "plotly_domain")]
    pub domain: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_owned()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Starts from `$HOME/.plotly/.config` when present, then applies
    /// `PLOTLY_DOMAIN`.
    pub fn from_env() -> ChartResult<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> ChartResult<Self> {
        let mut config = match plotly_home(&lookup).map(|dir| dir.join(".config")) {
            Some(path) if path.is_file() => Self::from_file(path)?,
            _ => Self::default(),
        };
        if let Some(domain) = lookup(DOMAIN_ENV).filter(|d| !d.trim().is_empty()) {
            config.domain = domain;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ChartError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("invalid client config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let domain = self.domain.trim();
        if !(domain.starts_with("https://") || domain.starts_with("http://")) {
            return Err(ChartError::Config(format!(
                "domain must start with http:// or https://, got `{}`",
                self.domain
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ChartError::Config("timeout_secs must be > 0".to_owned()));
        }
        Ok(())
    }

    /// Full URL of the plot submission endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/clientresp", self.domain.trim().trim_end_matches('/'))
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
