mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{hex_to_rgb, rgb_from_hex_str};
