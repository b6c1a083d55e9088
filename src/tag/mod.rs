//! In-memory tag tree.
//!
//! [`Tag`] is the node type, [`List`] and [`Compound`] are the two container
//! payloads. Equality and the JSON projection live in their own modules.

pub mod compound;
mod eq;
mod json;
pub mod kind;
pub mod list;
pub mod value;

pub use compound::Compound;
pub use kind::*;
pub use list::List;
pub use value::Tag;
