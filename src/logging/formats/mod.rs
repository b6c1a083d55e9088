mod compact;
mod json;
mod pretty;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt::MakeWriter, layer::Layer, registry::LookupSpan};

use super::config::LoggingConfig;

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Formatter layer for `config.format`, writing to `writer`.
pub fn build_layer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Compact => compact::build_compact_layer(config, writer),
        LogFormat::Pretty => pretty::build_pretty_layer(config, writer),
        LogFormat::Json => json::build_json_layer(config, writer),
    }
}
