//! JSON summary of a generated pattern.

use chrono::{DateTime, Utc};
use dmc_quantize::{LegendEntry, Pattern};
use serde::Serialize;

use crate::error::ExportError;

/// One legend row in the report
#[derive(Debug, Serialize)]
pub struct LegendReport {
    pub symbol: String,
    pub floss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub real: String,
    pub dmc: String,
    pub stitches: usize,
    pub palette_index: usize,
}

impl From<&LegendEntry> for LegendReport {
    fn from(entry: &LegendEntry) -> Self {
        Self {
            symbol: entry.symbol.to_string(),
            floss: entry.label.clone(),
            description: entry.description.clone(),
            real: entry.real_hex(),
            dmc: entry.matched_hex(),
            stitches: entry.stitch_count,
            palette_index: entry.palette_index,
        }
    }
}

/// Machine-readable description of one conversion
#[derive(Debug, Serialize)]
pub struct PatternReport {
    pub source: String,
    pub palette: String,
    pub generated_at: DateTime<Utc>,
    pub width: usize,
    pub height: usize,
    pub stitch_count: usize,
    pub legend: Vec<LegendReport>,
    pub symbols: Vec<Vec<String>>,
}

impl PatternReport {
    pub fn new(pattern: &Pattern, source: &str, palette: &str) -> Self {
        Self::at(pattern, source, palette, Utc::now())
    }

    /// Build a report with a fixed timestamp
    pub fn at(pattern: &Pattern, source: &str, palette: &str, generated_at: DateTime<Utc>) -> Self {
        Self {
            source: source.to_string(),
            palette: palette.to_string(),
            generated_at,
            width: pattern.width(),
            height: pattern.height(),
            stitch_count: pattern.stitch_count(),
            legend: pattern.legend().iter().map(LegendReport::from).collect(),
            symbols: pattern.symbol_grid(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
