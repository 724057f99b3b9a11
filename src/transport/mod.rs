mod recording_transport;
mod wire;

#[cfg(feature = "http-transport")]
mod http_transport;

pub use recording_transport::RecordingTransport;
pub use wire::{
    CLIENT_ORIGIN, CLIENT_PLATFORM, PlotRequest, PlotResponse, decode_plot_response,
    encode_plot_request,
};

#[cfg(feature = "http-transport")]
pub use http_transport::HttpTransport;

use crate::error::ChartResult;

/// Raw service reply as seen by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Contract implemented by anything that can carry an encoded plot request
/// to the publishing service.
///
/// Transports move bytes only; status and body interpretation stays in
/// [`decode_plot_response`] so every transport fails the same way.
pub trait Transport {
    fn send(&mut self, request: &PlotRequest) -> ChartResult<TransportResponse>;
}
