//! High-level entry point: crop then encode.

mod builder;
mod error;

pub use builder::StitchPatterner;
pub use error::QuantizeError;
