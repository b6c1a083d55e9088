use std::{any::Any, error::Error};

use crate::StatusCode;

/// Extension trait for library errors (object-safe).
///
/// Provides:
/// - a status code,
/// - a message safe to show to whoever supplied the input,
/// - a detailed message for logs,
/// - key/value tags for metrics.
pub trait ErrorExt: Error + Send + Sync + 'static {
    /// Status code for this error.
    ///
    /// Defaults to [`StatusCode::Internal`].
    fn status_code(&self) -> StatusCode {
        StatusCode::Internal
    }

    /// Returns the error as [`Any`](std::any::Any) for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Message that does not leak implementation details.
    fn client_message(&self) -> String {
        match self.status_code() {
            StatusCode::Unknown | StatusCode::Internal => "Internal error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Detailed message for logs.
    fn log_message(&self) -> String {
        format!("{self:?}")
    }

    /// Tags for observability backends.
    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
        ]
    }

    /// Short type name of the error.
    fn type_name(&self) -> String {
        std::any::type_name::<Self>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
            .to_string()
    }
}
