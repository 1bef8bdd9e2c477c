//! JSON encoding for [`Vec2`](crate::Vec2).
//!
//! Vectors are always written as a two element array `[x, y]`. Two shapes
//! are read back: that array, and the older keyed object `{"X": x, "Y": y}`.

pub mod error;
pub mod json;

pub use error::CodecError;
pub use json::{from_slice, from_str, to_string, to_vec};
