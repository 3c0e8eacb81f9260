//! Pattern encoding: nearest-color matching, legend and aligned grids.
//!
//! [`PatternEncoder`] walks a sprite in row-major order and builds a
//! [`Pattern`] in one pass:
//!
//! - a legend of distinct matched threads, ordered by first appearance,
//!   each with a symbol from a [`SymbolAlphabet`]
//! - a [`PatternGrid`] with one [`Cell`] per pixel
//!
//! The symbol, real-color and palette-color grids are derived views of the
//! same cells, so they always agree on which cells are empty.

mod encoder;
mod error;
mod grid;
mod legend;
mod symbols;

pub use encoder::{Pattern, PatternEncoder};
pub use error::EncodeError;
pub use grid::{Cell, PatternGrid, SENTINEL};
pub use legend::LegendEntry;
pub use symbols::SymbolAlphabet;
