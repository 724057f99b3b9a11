use crate::error::{ChartError, ChartResult};
use crate::transport::{PlotRequest, Transport, TransportResponse};

/// In-memory transport used by tests and dry runs.
///
/// Every request is recorded; each call replays the configured response, or
/// fails with [`ChartError::Transport`] when none is set.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    response: Option<TransportResponse>,
    requests: Vec<PlotRequest>,
}

impl RecordingTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `status`/`body` for every request.
    #[must_use]
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Some(TransportResponse::new(status, body)),
            requests: Vec::new(),
        }
    }

    /// Replays a successful service reply pointing at `url`.
    #[must_use]
    pub fn with_chart_url(url: &str, filename: &str) -> Self {
        let body = serde_json::json!({
            "url": url,
            "filename": filename,
            "message": "",
            "warning": "",
            "error": "",
        });
        Self::responding(200, body.to_string())
    }

    #[must_use]
    pub fn requests(&self) -> &[PlotRequest] {
        &self.requests
    }

    #[must_use]
    pub fn last_request(&self) -> Option<&PlotRequest> {
        self.requests.last()
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: &PlotRequest) -> ChartResult<TransportResponse> {
        self.requests.push(request.clone());
        self.response
            .clone()
            .ok_or_else(|| ChartError::Transport("no response configured".to_owned()))
    }
}
