//! chart-publish: typed chart descriptions and a publishing client.
//!
//! Figures are assembled from validated value types in [`core`] and handed to
//! an [`api::PublishingClient`], which encodes them for the hosted chart
//! service and sends them through a [`transport::Transport`].

pub mod api;
pub mod core;
pub mod error;
pub mod gallery;
pub mod telemetry;
pub mod transport;

pub use crate::api::{ClientConfig, Credentials, PublishOptions, PublishingClient};
pub use crate::core::{Annotation, Figure, Layout, Trace};
pub use crate::error::{ChartError, ChartResult};

/// Shared body of the gallery binaries: load configuration, authenticate,
/// and publish without opening a browser.
#[cfg(feature = "http-transport")]
pub fn publish_gallery_figure(
    figure: &Figure,
    filename: &str,
) -> ChartResult<api::PublishedChart> {
    let credentials = Credentials::load()?;
    let config = ClientConfig::from_env()?;
    let mut client = PublishingClient::connect(config)?;
    let session = client.authenticate_with(credentials)?;
    client.publish(&session, figure, &gallery::publish_options(filename))
}
