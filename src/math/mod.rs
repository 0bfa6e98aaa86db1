mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{hex_to_rgb, hsv_to_rgb, shade};
