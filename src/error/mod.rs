//! Error types of the codec: wire-format failures, validation failures and
//! the umbrella [`NbtError`].

pub mod nbt_error;
pub mod parse;
pub mod validation;

pub use nbt_error::{LimitKind, NbtError, NbtResult};
pub use parse::ParseError;
pub use validation::ValidationError;
