use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde_repr")]
use serde_repr::{Deserialize_repr, Serialize_repr};
#[cfg(feature = "strum")]
use strum_macros::{AsRefStr, EnumIter};

/// Status codes used to categorise codec errors.
///
/// # Ranges:
/// - 0xxx: success
/// - 1xxx: general errors
/// - 2xxx: tree access and validation errors
/// - 3xxx: resource limits
/// - 5xxx: compression
/// - 8xxx: wire format errors
///
/// `num_enum::TryFromPrimitive` provides `TryFrom<u32>`, so codes can travel
/// across process boundaries as plain integers.
#[cfg_attr(feature = "strum", derive(AsRefStr, EnumIter))]
#[cfg_attr(feature = "serde_repr", derive(Serialize_repr, Deserialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Success ===
    Success = 0,

    // === 1xxx: General ===
    Unknown = 1000,
    Internal = 1003,
    InvalidArgs = 1004,

    // === 2xxx: Tree access / validation ===
    NotFound = 2000,
    IndexOutOfBounds = 2006,
    WrongType = 2007,
    InvalidData = 2009,
    HeterogeneousList = 2010,

    // === 3xxx: Limits ===
    SizeLimit = 3000,
    DepthLimit = 3001,
    NodeLimit = 3002,

    // === 5xxx: Compression ===
    CompressionFailed = 5005,

    // === 8xxx: Wire format ===
    InvalidTag = 8000,
    UnexpectedEof = 8001,
    InvalidLength = 8002,
    InvalidUtf8 = 8004,
    EncodingError = 8010,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    /// Numeric representation of the status code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Looks up a `StatusCode` by its numeric value.
    ///
    /// Returns `None` if the value does not match any variant.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Returns `true` if `code` means success.
    pub fn is_success(code: u32) -> bool {
        Self::Success as u32 == code
    }

    /// The caller built or passed something invalid (2xxx).
    pub fn is_client_error(&self) -> bool {
        (2000..=2999).contains(&self.code()) || matches!(self, Self::InvalidArgs)
    }

    /// A resource ceiling was hit while decoding (3xxx).
    ///
    /// Callers usually treat these as an admission decision about untrusted
    /// input rather than as corruption.
    pub fn is_limit(&self) -> bool {
        (3000..=3999).contains(&self.code())
    }

    /// Malformed bytes on the wire (8xxx).
    pub fn is_wire_error(&self) -> bool {
        (8000..=8999).contains(&self.code())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Common trait implementations for StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        // With "strum" enabled use the AsRefStr name, otherwise the Debug name.
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_try_from_u32() {
        let n = StatusCode::NodeLimit.code();
        assert_eq!(StatusCode::try_from(n).unwrap(), StatusCode::NodeLimit);
        assert!(StatusCode::from_u32(99999).is_none());
    }

    #[test]
    fn test_code_and_into() {
        let c = StatusCode::NotFound;
        assert_eq!(c.code(), 2000);
        let n: u32 = c.into();
        assert_eq!(n, 2000);
        assert!(StatusCode::is_success(StatusCode::Success.code()));
        assert!(!StatusCode::is_success(StatusCode::NotFound.code()));
    }

    /// Limit codes are kept apart from wire errors so callers can apply a
    /// separate rejection policy.
    #[test]
    fn test_limit_vs_wire_ranges() {
        assert!(StatusCode::NodeLimit.is_limit());
        assert!(StatusCode::DepthLimit.is_limit());
        assert!(!StatusCode::NodeLimit.is_wire_error());
        assert!(StatusCode::InvalidTag.is_wire_error());
        assert!(!StatusCode::InvalidTag.is_limit());
    }

    #[test]
    fn test_client_errors() {
        assert!(StatusCode::HeterogeneousList.is_client_error());
        assert!(StatusCode::InvalidArgs.is_client_error());
        assert!(!StatusCode::UnexpectedEof.is_client_error());
    }

    #[test]
    fn test_display_contains_name_and_code() {
        let s = format!("{}", StatusCode::InvalidTag);
        assert!(s.contains("8000"), "Display must contain code 8000, got: {s}");
        assert!(
            s.contains("InvalidTag"),
            "Display must contain variant name 'InvalidTag', got: {s}"
        );
    }
}
