//! Sprite grids and bounding-box cropping.
//!
//! [`Sprite`] is the in-memory pixel grid for both the decoded source image
//! and the cropped result. [`crop`] trims fully transparent borders.

mod crop;
mod sprite;

pub use crop::{bounding_box, crop, BoundingBox};
pub use sprite::Sprite;
