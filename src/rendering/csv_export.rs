//! CSV sheets: the three grids plus the legend.

use std::path::{Path, PathBuf};

use dmc_quantize::{LegendEntry, Pattern, SENTINEL};

use crate::error::ExportError;

const LEGEND_HEADER: &str = "Symbol,Floss,Description,Real,Dmc,Stitches";

/// Quote a field if it contains a delimiter, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn join_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialize a grid view; sentinel cells are written as empty fields.
pub fn grid_to_csv(grid: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in grid {
        let fields = row
            .iter()
            .map(|cell| if cell == SENTINEL { "" } else { cell.as_str() });
        out.push_str(&join_row(fields));
        out.push('\n');
    }
    out
}

/// Serialize the legend with a header row.
pub fn legend_to_csv(legend: &[LegendEntry]) -> String {
    let mut out = String::from(LEGEND_HEADER);
    out.push('\n');
    for entry in legend {
        let symbol = entry.symbol.to_string();
        let real = entry.real_hex();
        let dmc = entry.matched_hex();
        let stitches = entry.stitch_count.to_string();
        out.push_str(&join_row([
            symbol.as_str(),
            entry.label.as_str(),
            entry.description.as_deref().unwrap_or(""),
            real.as_str(),
            dmc.as_str(),
            stitches.as_str(),
        ]));
        out.push('\n');
    }
    out
}

/// Write symbols.csv, real.csv, dmc.csv and legend.csv into `dir`.
///
/// The directory is created if needed. Returns the written paths.
pub fn write_csv_sheets(pattern: &Pattern, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir)?;

    let files = [
        ("symbols.csv", grid_to_csv(&pattern.symbol_grid())),
        ("real.csv", grid_to_csv(&pattern.real_color_grid())),
        ("dmc.csv", grid_to_csv(&pattern.palette_color_grid())),
        ("legend.csv", legend_to_csv(pattern.legend())),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = dir.join(name);
        std::fs::write(&path, content)?;
        tracing::debug!(path = %path.display(), "Wrote CSV sheet");
        written.push(path);
    }

    Ok(written)
}
