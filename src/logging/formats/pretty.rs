use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::Layer,
    registry::LookupSpan,
};

use crate::logging::config::LoggingConfig;

/// Multi-line output for development.
pub fn build_pretty_layer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .event_format(fmt::format().pretty())
        .with_writer(writer)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_line_number(true);

    Box::new(layer)
}
