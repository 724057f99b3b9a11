use std::time::Duration;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::transport::{PlotRequest, Transport, TransportResponse};

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> ChartResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("chart-publish/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChartError::Transport(format!("reqwest client error: {e}")))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, request: &PlotRequest) -> ChartResult<TransportResponse> {
        debug!(url = %request.url, "sending plot request");
        let response = self
            .client
            .post(&request.url)
            .form(&request.form)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ChartError::Transport(format!("request to {} timed out", request.url))
                } else {
                    ChartError::Transport(format!("request to {} failed: {e}", request.url))
                }
            })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ChartError::Transport(format!("failed to read response body: {e}")))?;
        debug!(status, body_len = body.len(), "received plot response");
        Ok(TransportResponse { status, body })
    }
}
