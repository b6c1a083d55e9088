use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{
    binary::{DecodeOptions, EncodeOptions},
    logging::LoggingConfig,
};

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "NBTKIT";

/// Application-level defaults for the codec and for logging.
///
/// Nothing here is global state: callers turn a loaded `Settings` into
/// explicit options and pass those to every decode/encode call. Nested keys
/// in the environment are separated by a double underscore, e.g.
/// `NBTKIT_DECODE__MAX_NODES=4096` or `NBTKIT_ENCODE__ENDIAN=little`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub decode: DecodeOptions,
    pub encode: EncodeOptions,
    pub logging: LoggingConfig,
}

impl Settings {
    /// Built-in defaults overridden by `NBTKIT_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`Settings::load`], with a TOML/JSON/YAML file layered in between.
    /// The format follows the file extension.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let cfg = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }

    pub fn decode_options(&self) -> DecodeOptions {
        self.decode.clone()
    }

    pub fn encode_options(&self) -> EncodeOptions {
        self.encode.clone()
    }
}
