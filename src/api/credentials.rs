use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const USERNAME_ENV: &str = "PLOTLY_USERNAME";
pub const API_KEY_ENV: &str = "PLOTLY_API_KEY";
pub const CREDENTIALS_FILE_ENV: &str = "PLOTLY_CREDENTIALS_FILE";

/// Account identifier and access token for the publishing service.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolves credentials from the process environment, then the file named
    /// by `PLOTLY_CREDENTIALS_FILE`, then `$HOME/.plotly/.credentials`.
    pub fn load() -> ChartResult<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Same resolution order as [`Credentials::load`] with an injectable
    /// variable lookup.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> ChartResult<Self> {
        if let Some(credentials) = Self::from_vars(&lookup)? {
            return Ok(credentials);
        }
        if let Some(path) = lookup(CREDENTIALS_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            return Self::from_file(path);
        }
        match default_credentials_path(&lookup) {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Err(ChartError::Config(format!(
                "no credentials found: set {USERNAME_ENV} and {API_KEY_ENV}, \
                 or point {CREDENTIALS_FILE_ENV} at a credentials file"
            ))),
        }
    }

    /// Reads `PLOTLY_USERNAME`/`PLOTLY_API_KEY`. Returns `Ok(None)` when
    /// neither is set and an error when only one is.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> ChartResult<Option<Self>> {
        let username = lookup(USERNAME_ENV).filter(|v| !v.trim().is_empty());
        let api_key = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty());
        match (username, api_key) {
            (Some(username), Some(api_key)) => Ok(Some(Self { username, api_key })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ChartError::Config(format!(
                "{USERNAME_ENV} is set but {API_KEY_ENV} is not"
            ))),
            (None, Some(_)) => Err(ChartError::Config(format!(
                "{API_KEY_ENV} is set but {USERNAME_ENV} is not"
            ))),
        }
    }

    /// Reads a JSON credentials file with `username` and `api_key` fields.
    /// Other fields are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ChartError::Config(format!(
                "failed to read credentials file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&raw).map_err(|e| match e {
            ChartError::Config(msg) => ChartError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let credentials: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("invalid credentials json: {e}")))?;
        if credentials.username.trim().is_empty() || credentials.api_key.trim().is_empty() {
            return Err(ChartError::Config(
                "credentials must have a non-empty username and api_key".to_owned(),
            ));
        }
        Ok(credentials)
    }
}

pub(crate) fn plotly_home(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    lookup("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".plotly"))
}

fn default_credentials_path(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    plotly_home(lookup).map(|dir| dir.join(".credentials"))
}
