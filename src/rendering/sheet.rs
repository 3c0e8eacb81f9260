//! HTML pattern sheets rendered with Tera.
//!
//! A sheet is a table with one cell per stitch (symbol as text, stitch color
//! as background) followed by the legend. The workbook puts the REAL and DMC
//! sheets into a single document.

use dmc_quantize::{Cell, LegendEntry, Pattern, Rgba};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "workbook.html";

const WORKBOOK_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
  body { font-family: sans-serif; margin: 1.5em; }
  h2 { margin-top: 2em; }
  table.grid { border-collapse: collapse; }
  table.grid td { width: 1.4em; height: 1.4em; border: 1px solid #CCCCCC; text-align: center; font-family: monospace; font-size: 0.9em; padding: 0; }
  table.grid tr:nth-child(10n) td { border-bottom: 2px solid #404040; }
  table.grid td:nth-child(10n) { border-right: 2px solid #404040; }
  table.legend { border-collapse: collapse; margin-top: 1em; }
  table.legend th, table.legend td { border: 1px solid #CCCCCC; padding: 0.2em 0.6em; }
  table.legend td.swatch { text-align: center; font-family: monospace; }
</style>
</head>
<body>
<h1>{{ title }}</h1>
<p>{{ width }} x {{ height }} stitches, {{ stitch_count }} stitched cells, {{ legend_count }} threads</p>
{% for sheet in sheets %}
<section id="{{ sheet.name }}">
<h2>{{ sheet.name }}</h2>
<table class="grid">
{% for row in sheet.rows %}<tr>{% for cell in row %}{% if cell.symbol %}<td style="background:{{ cell.background }};color:{{ cell.color }}">{{ cell.symbol }}</td>{% else %}<td></td>{% endif %}{% endfor %}</tr>
{% endfor %}</table>
<table class="legend">
<tr><th>Palette</th><th>Floss</th><th>Description</th><th>Real</th><th>DMC</th><th>Stitches</th></tr>
{% for entry in sheet.legend %}<tr><td class="swatch" style="background:{{ entry.background }};color:{{ entry.color }}">{{ entry.symbol }}</td><td>{{ entry.label }}</td><td>{{ entry.description }}</td><td>{{ entry.real }}</td><td>{{ entry.dmc }}</td><td>{{ entry.stitches }}</td></tr>
{% endfor %}</table>
</section>
{% endfor %}
</body>
</html>
"#;

/// Which color a sheet paints its stitches with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Source pixel colors
    Real,
    /// Matched thread colors
    Dmc,
}

impl SheetKind {
    fn name(self) -> &'static str {
        match self {
            SheetKind::Real => "REAL",
            SheetKind::Dmc => "DMC",
        }
    }

    fn pick(self, real: Rgba, matched: Rgba) -> Rgba {
        match self {
            SheetKind::Real => real,
            SheetKind::Dmc => matched,
        }
    }
}

#[derive(Serialize)]
struct WorkbookView {
    title: String,
    width: usize,
    height: usize,
    stitch_count: usize,
    legend_count: usize,
    sheets: Vec<SheetView>,
}

#[derive(Serialize)]
struct SheetView {
    name: &'static str,
    rows: Vec<Vec<CellView>>,
    legend: Vec<LegendView>,
}

/// Empty cells serialize with an empty symbol and are left blank.
#[derive(Serialize, Default)]
struct CellView {
    symbol: String,
    background: String,
    color: String,
}

#[derive(Serialize)]
struct LegendView {
    symbol: String,
    label: String,
    description: String,
    real: String,
    dmc: String,
    stitches: usize,
    background: String,
    color: String,
}

fn sheet_view(pattern: &Pattern, kind: SheetKind) -> SheetView {
    let rows = pattern
        .grid()
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match (cell, pattern.legend_for(cell)) {
                    (Cell::Stitch { real, matched, .. }, Some(entry)) => {
                        let fill = kind.pick(*real, *matched);
                        CellView {
                            symbol: entry.symbol.to_string(),
                            background: fill.to_css_hex(),
                            color: fill.contrast_text().to_css_hex(),
                        }
                    }
                    _ => CellView::default(),
                })
                .collect()
        })
        .collect();

    let legend = pattern
        .legend()
        .iter()
        .map(|entry| legend_view(entry, kind))
        .collect();

    SheetView {
        name: kind.name(),
        rows,
        legend,
    }
}

fn legend_view(entry: &LegendEntry, kind: SheetKind) -> LegendView {
    let fill = kind.pick(entry.real, entry.matched);
    LegendView {
        symbol: entry.symbol.to_string(),
        label: entry.label.clone(),
        description: entry.description.clone().unwrap_or_default(),
        real: entry.real_hex(),
        dmc: entry.matched_hex(),
        stitches: entry.stitch_count,
        background: fill.to_css_hex(),
        color: fill.contrast_text().to_css_hex(),
    }
}

fn render(pattern: &Pattern, title: &str, kinds: &[SheetKind]) -> Result<String, ExportError> {
    let view = WorkbookView {
        title: title.to_string(),
        width: pattern.width(),
        height: pattern.height(),
        stitch_count: pattern.stitch_count(),
        legend_count: pattern.legend().len(),
        sheets: kinds.iter().map(|&k| sheet_view(pattern, k)).collect(),
    };

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, WORKBOOK_TEMPLATE)?;

    let context = Context::from_serialize(&view)?;
    let html = tera.render(TEMPLATE_NAME, &context)?;

    Ok(html)
}

/// Render a single sheet as an HTML document
pub fn render_sheet(pattern: &Pattern, kind: SheetKind, title: &str) -> Result<String, ExportError> {
    render(pattern, title, &[kind])
}

/// Render the REAL and DMC sheets into one HTML document
pub fn render_workbook(pattern: &Pattern, title: &str) -> Result<String, ExportError> {
    render(pattern, title, &[SheetKind::Real, SheetKind::Dmc])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmc_quantize::{Palette, PaletteEntry, Sprite, StitchPatterner};

    fn pattern() -> Pattern {
        let palette = Palette::new(vec![
            PaletteEntry::new(0, 0, 0, "310").with_description("Black & Dark"),
            PaletteEntry::new(255, 255, 255, "B5200"),
        ])
        .unwrap();
        let sprite = Sprite::from_rows(vec![
            vec![Rgba::opaque(10, 10, 10), Rgba::TRANSPARENT],
            vec![Rgba::TRANSPARENT, Rgba::opaque(250, 250, 250)],
        ])
        .unwrap();
        StitchPatterner::new(palette).convert(&sprite).unwrap()
    }

    #[test]
    fn test_workbook_contains_both_sheets() {
        let html = render_workbook(&pattern(), "mario").unwrap();
        assert!(html.contains("<title>mario</title>"));
        assert!(html.contains(r#"<section id="REAL">"#));
        assert!(html.contains(r#"<section id="DMC">"#));
    }

    #[test]
    fn test_real_sheet_uses_source_colors() {
        let html = render_sheet(&pattern(), SheetKind::Real, "t").unwrap();
        assert!(html.contains("background:#0A0A0A;color:#FFFFFF"));
        assert!(!html.contains(r#"<section id="DMC">"#));
    }

    #[test]
    fn test_dmc_sheet_uses_thread_colors() {
        let html = render_sheet(&pattern(), SheetKind::Dmc, "t").unwrap();
        assert!(html.contains("background:#000000;color:#FFFFFF"));
        assert!(html.contains("background:#FFFFFF;color:#000000"));
    }

    #[test]
    fn test_legend_rows() {
        let html = render_sheet(&pattern(), SheetKind::Dmc, "t").unwrap();
        assert!(html.contains("<td>310</td>"));
        assert!(html.contains("<td>#FF0A0A0A</td><td>#FF000000</td><td>1</td>"));
        assert!(html.contains("<td>B5200</td>"));
    }

    #[test]
    fn test_descriptions_are_escaped() {
        let html = render_sheet(&pattern(), SheetKind::Dmc, "t").unwrap();
        assert!(html.contains("Black &amp; Dark"));
    }

    #[test]
    fn test_empty_cells_are_blank() {
        let html = render_sheet(&pattern(), SheetKind::Real, "t").unwrap();
        assert!(html.contains("<tr><td></td><td style="));
        assert!(html.contains("</td><td></td></tr>"));
        assert!(!html.contains("none"));
    }
}
