//! tracing-subscriber setup.
//!
//! The codec only emits `tracing` events. Applications that want them on
//! stderr call [`init_logging`] once at startup.

pub mod config;
mod filters;
pub mod formats;

pub use config::LoggingConfig;
pub use filters::build_filter_from_config;
pub use formats::LogFormat;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Installs the global subscriber described by `config`, writing to stderr.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_filter = filters::build_filter_from_config(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(formats::build_layer(config, std::io::stderr))
        .try_init()?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        level = %config.level,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}


#[cfg(test)]
mod tests {
    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::{test_writer::VecMakeWriter, *};

    fn capture(format: LogFormat) -> String {
        let cfg = LoggingConfig {
            format,
            ansi: false,
            ..LoggingConfig::default()
        };
        let writer = VecMakeWriter::default();
        let subscriber = Registry::default().with(formats::build_layer(&cfg, writer.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(entries = 3, "Decoded document");
        });
        writer.contents()
    }

    #[test]
    fn test_compact_output() {
        let out = capture(LogFormat::Compact);
        assert!(out.contains("Decoded document"));
        assert!(out.contains("entries=3"));
    }

    #[test]
    fn test_pretty_output() {
        assert!(capture(LogFormat::Pretty).contains("Decoded document"));
    }

    #[test]
    fn test_json_output_is_one_object_per_line() {
        let out = capture(LogFormat::Json);
        let line = out.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["fields"]["message"], "Decoded document");
        assert_eq!(value["fields"]["entries"], 3);
    }

    #[test]
    fn test_format_names() {
        let f: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, LogFormat::Json);
    }
}
