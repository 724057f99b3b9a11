//! Logging setup for the gallery binaries.
//!
//! The library only emits `tracing` events (request encoding at `debug`, the
//! published URL at `info`, service warnings and skipped browser opens at
//! `warn`). Binaries call `init_default_tracing` so those events reach stderr
//! while stdout carries nothing but the chart URL. Hosts embedding the crate
//! can install their own subscriber instead; `RUST_LOG` filters apply either
//! way.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Events go to stderr so stdout stays reserved for published URLs.
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
