use tracing::Subscriber;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::LoggingError;
use crate::sink::tracing_sink::TARGET;

/// Build a subscriber for `config` that writes to `make_writer`.
///
/// The filter honours `RUST_LOG`, then applies the configured level to the
/// `fxtrace` target and any extra directives on top.
pub fn build_subscriber<W>(
    config: &LoggingConfig,
    make_writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>, LoggingError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    config.validate()?;

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(make_writer)
            .with_current_span(false)
            .with_span_list(false)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(make_writer)
            .with_ansi(false)
            .boxed(),
    };

    let mut filter = EnvFilter::from_default_env();
    let own_directive = format!("{}={}", TARGET, config.level.to_ascii_lowercase());
    for directive in std::iter::once(&own_directive).chain(config.directives.iter()) {
        let parsed: Directive = directive.parse().map_err(|e: ParseError| {
            LoggingError::InvalidDirective {
                directive: directive.clone(),
                message: e.to_string(),
            }
        })?;
        filter = filter.add_directive(parsed);
    }

    Ok(Box::new(tracing_subscriber::registry().with(fmt_layer).with(filter)))
}

/// Install the global subscriber, writing to stderr.
///
/// # Errors
///
/// Fails on an invalid configuration or directive, or if a global subscriber
/// is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    build_subscriber(config, std::io::stderr)?
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized {
            message: e.to_string(),
        })
}
