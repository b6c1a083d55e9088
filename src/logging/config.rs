use serde::{Deserialize, Serialize};

use super::formats::LogFormat;

/// Subscriber settings. `RUST_LOG`, when set, takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this crate's events, e.g. "info" or "debug".
    pub level: String,
    pub format: LogFormat,
    pub with_target: bool,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            with_target: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Filter directive: dependencies at warn, this crate at `level`.
    pub fn build_filter_directive(&self) -> String {
        format!("warn,{}={}", env!("CARGO_CRATE_NAME"), self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            LoggingConfig::default().build_filter_directive(),
            "warn,nbtkit=info"
        );
    }
}
