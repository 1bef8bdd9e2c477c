pub mod utils;
pub mod vec2;

pub use utils::{fclamp, fmax, fmin};
pub use vec2::{SMALLEST_NONZERO, Vec2};

pub const ORIGIN: Vec2 = Vec2::ORIGIN;
