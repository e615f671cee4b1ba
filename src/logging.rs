//! Diagnostic logging setup
//!
//! Logs always go to stderr; stdout is reserved for command output such as
//! patched properties streamed without `--output`.

use clap::ValueEnum;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable single-line output
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Install the global subscriber.
///
/// The filter comes from `DEPLS_LOG`, falling back to `warn`. Keep the
/// returned guard alive until exit so buffered events are flushed.
pub fn init_logging(format: LogFormat) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref());

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_target(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init(),
    };

    if result.is_err() {
        debug!("Tracing subscriber already initialized, skipping");
    }
    guard
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "warn")]
    #[case(Some("debug"), "debug")]
    #[case(Some("depls_build_util=trace"), "depls_build_util=trace")]
    fn build_filter_uses_directives_or_default(
        #[case] directives: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(build_filter(directives).to_string(), expected);
    }

    #[test]
    fn init_logging_twice_does_not_panic() {
        let _first = init_logging(LogFormat::Text);
        let _second = init_logging(LogFormat::Json);
    }
}
