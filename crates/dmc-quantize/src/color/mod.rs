//! Color type and hex encoding
//!
//! Every color in the pipeline is an 8-bit RGBA quadruple. Sprite pixels,
//! palette entries and legend colors all share the same [`Rgba`] type, so
//! distances and equality are always computed over the same four channels.
//!
//! # Example
//!
//! ```
//! use dmc_quantize::Rgba;
//!
//! let salmon = Rgba::new(250, 128, 114, 255);
//! assert_eq!(salmon.to_argb_hex(), "FFFA8072");
//! ```

mod rgba;

pub use rgba::Rgba;
