mod client;
mod client_config;
mod credentials;
mod publish_options;

pub use client::{PublishedChart, PublishingClient, Session};
pub use client_config::{ClientConfig, DEFAULT_DOMAIN, DEFAULT_TIMEOUT_SECS, DOMAIN_ENV};
pub use credentials::{API_KEY_ENV, CREDENTIALS_FILE_ENV, Credentials, USERNAME_ENV};
pub use publish_options::{FileOpt, PublishOptions};
