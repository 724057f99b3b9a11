use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{Credentials, FileOpt, PublishOptions};
use crate::core::{Figure, Layout};
use crate::error::{ChartError, ChartResult};
use crate::transport::TransportResponse;

pub const CLIENT_ORIGIN: &str = "plot";
pub const CLIENT_PLATFORM: &str = "rust";

/// Form-encoded request for the service's `clientresp` endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct PlotRequest {
    pub url: String,
    pub form: Vec<(String, String)>,
}

impl PlotRequest {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for PlotRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form: Vec<(&str, &str)> = self
            .form
            .iter()
            .map(|(key, value)| {
                if key == "key" {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("PlotRequest")
            .field("url", &self.url)
            .field("form", &form)
            .finish()
    }
}

#[derive(Serialize)]
struct PlotKwargs<'a> {
    filename: &'a str,
    fileopt: FileOpt,
    world_readable: bool,
    layout: &'a Layout,
}

/// Successful reply body. Empty strings mean "not present".
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PlotResponse {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub warning: String,
    #[serde(default)]
    pub error: String,
}

pub fn encode_plot_request(
    endpoint: &str,
    credentials: &Credentials,
    figure: &Figure,
    options: &PublishOptions,
) -> ChartResult<PlotRequest> {
    let args = serde_json::to_string(figure.traces())
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize traces: {e}")))?;
    let kwargs = serde_json::to_string(&PlotKwargs {
        filename: &options.filename,
        fileopt: options.fileopt,
        world_readable: options.world_readable,
        layout: figure.layout(),
    })
    .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout: {e}")))?;

    let form = vec![
        ("un".to_owned(), credentials.username.clone()),
        ("key".to_owned(), credentials.api_key.clone()),
        ("origin".to_owned(), CLIENT_ORIGIN.to_owned()),
        ("platform".to_owned(), CLIENT_PLATFORM.to_owned()),
        ("version".to_owned(), env!("CARGO_PKG_VERSION").to_owned()),
        ("args".to_owned(), args),
        ("kwargs".to_owned(), kwargs),
    ];

    Ok(PlotRequest {
        url: endpoint.to_owned(),
        form,
    })
}

/// Maps a raw reply onto the error taxonomy or a [`PlotResponse`].
pub fn decode_plot_response(response: &TransportResponse) -> ChartResult<PlotResponse> {
    let parsed = serde_json::from_str::<PlotResponse>(&response.body).ok();
    let detail = parsed
        .as_ref()
        .map(|p| p.error.trim())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| response.body.trim())
        .to_owned();

    match response.status {
        200..=299 => {}
        401 | 403 => return Err(ChartError::Authentication(detail)),
        429 => return Err(ChartError::Quota(detail)),
        status => {
            let body_error = parsed
                .as_ref()
                .map(|p| p.error.trim())
                .filter(|e| !e.is_empty());
            return Err(match body_error.map(classify_service_error) {
                Some(ChartError::Service(_)) | None => {
                    ChartError::Service(format!("HTTP {status}: {detail}"))
                }
                Some(classified) => classified,
            });
        }
    }

    let parsed = parsed.ok_or_else(|| {
        ChartError::Service(format!("malformed response body: {}", response.body.trim()))
    })?;

    if !parsed.error.trim().is_empty() {
        return Err(classify_service_error(parsed.error.trim()));
    }
    if parsed.url.trim().is_empty() {
        return Err(ChartError::Service(
            "response did not include a chart url".to_owned(),
        ));
    }
    Ok(parsed)
}

const QUOTA_PHRASES: &[&str] = &["quota", "request limit", "rate limit", "too many requests"];
const CREDENTIAL_PHRASES: &[&str] = &[
    "api key",
    "api_key",
    "credentials",
    "authenticat",
    "sign in",
    "username",
];

fn classify_service_error(message: &str) -> ChartError {
    let lower = message.to_lowercase();
    if QUOTA_PHRASES.iter().any(|needle| lower.contains(needle)) {
        ChartError::Quota(message.to_owned())
    } else if CREDENTIAL_PHRASES.iter().any(|needle| lower.contains(needle)) {
        ChartError::Authentication(message.to_owned())
    } else {
        ChartError::Service(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_are_classified_by_message() {
        assert!(matches!(
            classify_service_error("Hey there! You've hit one of our API request limits."),
            ChartError::Quota(_)
        ));
        assert!(matches!(
            classify_service_error("Aw, snap! Invalid API key for username TestBot"),
            ChartError::Authentication(_)
        ));
        assert!(matches!(
            classify_service_error("Internal error"),
            ChartError::Service(_)
        ));
        assert!(matches!(
            classify_service_error("axis range limit exceeded for xaxis"),
            ChartError::Service(_)
        ));
        assert!(matches!(
            classify_service_error("Rate limit reached, slow down"),
            ChartError::Quota(_)
        ));
    }

    #[test]
    fn request_debug_redacts_api_key() {
        let request = PlotRequest {
            url: "https://plot.ly/clientresp".to_owned(),
            form: vec![
                ("un".to_owned(), "someone".to_owned()),
                ("key".to_owned(), "secret-token".to_owned()),
            ],
        };
        let rendered = format!("{request:?}");
        assert!(rendered.contains("someone"));
        assert!(!rendered.contains("secret-token"));
    }
}
