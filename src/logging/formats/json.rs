use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::Layer,
    registry::LookupSpan,
};

use crate::logging::config::LoggingConfig;

/// One JSON object per event. ANSI colouring is always off.
pub fn build_json_layer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .event_format(fmt::format().json().with_current_span(true))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(config.with_target);

    Box::new(layer)
}
