use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::Figure;
use crate::error::{ChartError, ChartResult};
use crate::transport::{Transport, decode_plot_response, encode_plot_request};

use super::{ClientConfig, Credentials, PublishOptions};

/// Credentials accepted by a client, ready to be attached to submissions.
///
/// The service checks the credentials when a chart is submitted, so a
/// session only proves they are well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    credentials: Credentials,
    authenticated_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedChart {
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    pub published_at: DateTime<Utc>,
}

pub struct PublishingClient<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> PublishingClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn authenticate(&self, account: &str, token: &str) -> ChartResult<Session> {
        self.authenticate_with(Credentials::new(account, token))
    }

    pub fn authenticate_with(&self, credentials: Credentials) -> ChartResult<Session> {
        if credentials.username.trim().is_empty() {
            return Err(ChartError::Authentication(
                "account identifier must not be empty".to_owned(),
            ));
        }
        if credentials.api_key.trim().is_empty() {
            return Err(ChartError::Authentication(
                "access token must not be empty".to_owned(),
            ));
        }
        debug!(username = %credentials.username, "session established");
        Ok(Session {
            credentials,
            authenticated_at: Utc::now(),
        })
    }

    /// Submits `figure` for rendering and returns where it was published.
    ///
    /// The figure and options are validated before anything is sent; a
    /// rejected input never reaches the transport.
    pub fn publish(
        &mut self,
        session: &Session,
        figure: &Figure,
        options: &PublishOptions,
    ) -> ChartResult<PublishedChart> {
        figure.validate()?;
        options.validate()?;

        let request = encode_plot_request(
            &self.config.endpoint(),
            session.credentials(),
            figure,
            options,
        )?;
        debug!(
            filename = %options.filename,
            traces = figure.traces().len(),
            annotations = figure.layout().annotations.len(),
            "encoded plot request"
        );

        let response = self.transport.send(&request)?;
        let reply = decode_plot_response(&response)?;

        if !reply.warning.trim().is_empty() {
            warn!(warning = %reply.warning.trim(), "service returned a warning");
        }
        let filename = if reply.filename.trim().is_empty() {
            options.filename.clone()
        } else {
            reply.filename
        };
        let published = PublishedChart {
            url: reply.url,
            filename,
            message: non_empty(reply.message),
            warning: non_empty(reply.warning),
            published_at: Utc::now(),
        };
        info!(url = %published.url, filename = %published.filename, "chart published");

        if options.auto_open {
            open_in_browser(&published.url);
        }
        Ok(published)
    }
}

#[cfg(feature = "http-transport")]
impl PublishingClient<crate::transport::HttpTransport> {
    /// Client over the blocking HTTP transport, using the configured timeout.
    pub fn connect(config: ClientConfig) -> ChartResult<Self> {
        config.validate()?;
        let transport = crate::transport::HttpTransport::new(config.timeout())?;
        Self::new(config, transport)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn open_in_browser(url: &str) {
    #[cfg(feature = "browser")]
    {
        if let Err(err) = open::that(url) {
            warn!(error = %err, url, "failed to open chart in browser");
        }
    }

    #[cfg(not(feature = "browser"))]
    {
        warn!(url, "auto_open requested but the `browser` feature is disabled");
    }
}
