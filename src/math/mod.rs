mod aabb;
mod ease;

pub use aabb::{clamp_position, AABB};
pub use ease::{jump_arc, lerp, wrap_angle};
