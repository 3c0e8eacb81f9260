//! Pattern input and output formats.
//!
//! - [`png_io`]: PNG sprite decoding and PNG chart previews
//! - [`sheet`]: HTML pattern sheets (REAL and DMC)
//! - [`csv_export`]: grid and legend CSV files
//! - [`report`]: JSON summary

pub mod csv_export;
pub mod png_io;
pub mod report;
pub mod sheet;

pub use png_io::{decode_sprite, decode_sprite_file, encode_preview};
pub use report::PatternReport;
pub use sheet::{render_sheet, render_workbook, SheetKind};
