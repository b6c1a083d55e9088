use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::Layer,
    registry::LookupSpan,
};

use crate::logging::config::LoggingConfig;

pub fn build_compact_layer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .event_format(fmt::format().compact())
        .with_writer(writer)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false);

    Box::new(layer)
}
