#![allow(clippy::module_inception)]

//! dmc-quantize: turn small sprites into cross-stitch patterns
//!
//! The crate maps every visible pixel of a sprite to the nearest thread of a
//! fixed reference palette (typically DMC embroidery floss) and encodes the
//! result as a symbol grid plus a color legend.
//!
//! # Quick Start
//!
//! The [`StitchPatterner`] builder is the primary entry point:
//!
//! ```
//! use dmc_quantize::{Palette, Rgba, Sprite, StitchPatterner};
//!
//! let csv = "Floss,Description,R,G,B\n310,Black,0,0,0\nB5200,Snow White,255,255,255\n";
//! let palette = Palette::load(csv.as_bytes()).unwrap();
//!
//! let image = Sprite::from_rows(vec![
//!     vec![Rgba::TRANSPARENT, Rgba::TRANSPARENT],
//!     vec![Rgba::opaque(20, 20, 20), Rgba::opaque(240, 240, 240)],
//! ])
//! .unwrap();
//!
//! let pattern = StitchPatterner::new(palette).convert(&image).unwrap();
//!
//! assert_eq!(pattern.symbol_grid(), vec![vec!["A", "B"]]);
//! assert_eq!(pattern.legend()[1].label, "B5200");
//! ```
//!
//! # Pipeline
//!
//! 1. [`crop`] trims fully transparent borders. A sprite without a single
//!    visible pixel yields `None` ([`QuantizeError::NoVisibleContent`]).
//! 2. [`PatternEncoder`] visits the cropped pixels in row-major order,
//!    matches each one with [`Palette::find_nearest`] and hands out symbols
//!    to threads in order of first appearance.
//!
//! # Matching
//!
//! Distance is plain Euclidean distance over the four raw channel values,
//! alpha included. There is no gamma handling and no perceptual color
//! space. Ties go to the entry that comes first in the palette.
//!
//! # Hex Strings
//!
//! Grid colors are written as `AARRGGBB` (alpha first, uppercase), legend
//! colors as `#AARRGGBB`. See [`Rgba::to_argb_hex`].

pub mod api;
pub mod color;
pub mod palette;
pub mod pattern;
pub mod sprite;


pub use api::{QuantizeError, StitchPatterner};
pub use color::Rgba;
pub use palette::{nearest, Palette, PaletteEntry, PaletteError, ParseColorError};
pub use pattern::{
    Cell, EncodeError, LegendEntry, Pattern, PatternEncoder, PatternGrid, SymbolAlphabet,
    SENTINEL,
};
pub use sprite::{bounding_box, crop, BoundingBox, Sprite};
