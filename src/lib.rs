//! Stitchgrid - turn pixel sprites into DMC cross-stitch patterns
//!
//! Command-line shell around the `dmc-quantize` crate: configuration, PNG
//! decoding, palette file loading and pattern exports.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
