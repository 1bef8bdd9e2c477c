//! A 2D `f64` vector value type with the usual geometric helpers and a
//! JSON codec that reads both historic encodings.

#[cfg(feature = "serde")]
pub mod codec;
pub mod math;

pub use math::Vec2;
