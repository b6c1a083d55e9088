//! Shared error vocabulary for nbtkit.
//!
//! The codec crate defines its concrete error enums; this crate holds the
//! pieces that are independent of the tag model: numeric [`StatusCode`]s and
//! the object-safe [`ErrorExt`] trait used for logging and metrics.

pub mod ext;
pub mod status_code;

pub use ext::*;
pub use status_code::*;
