//! CSV palette loader.
//!
//! Thread charts are usually distributed as CSV exports with a header row,
//! e.g. `Floss,Description,R,G,B,Hex`. Columns are located by header name
//! so extra columns and any column order are accepted.

use std::io::{BufRead, BufReader, Read};

use super::error::PaletteError;
use super::palette::PaletteEntry;
use crate::color::Rgba;

const RED_COLUMNS: &[&str] = &["r", "red"];
const GREEN_COLUMNS: &[&str] = &["g", "green"];
const BLUE_COLUMNS: &[&str] = &["b", "blue"];
const LABEL_COLUMNS: &[&str] = &["floss", "floss#", "dmc", "label"];
const DESCRIPTION_COLUMNS: &[&str] = &["description", "name"];

/// Byte order mark written by spreadsheet "CSV UTF-8" exports
const BOM: char = '\u{feff}';

/// Column positions resolved from the header row.
struct Columns {
    red: usize,
    green: usize,
    blue: usize,
    label: usize,
    description: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String], label_column: Option<&str>) -> Result<Self, PaletteError> {
        let find = |names: &[&str]| {
            header
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };
        let require = |names: &[&str], what: &str| {
            find(names).ok_or_else(|| {
                PaletteError::malformed(1, format!("missing {} column in header", what))
            })
        };

        let label = match label_column {
            Some(name) => require(&[name], &format!("label '{}'", name))?,
            None => require(LABEL_COLUMNS, "label")?,
        };

        Ok(Self {
            red: require(RED_COLUMNS, "R")?,
            green: require(GREEN_COLUMNS, "G")?,
            blue: require(BLUE_COLUMNS, "B")?,
            label,
            description: find(DESCRIPTION_COLUMNS),
        })
    }

    fn max_index(&self) -> usize {
        self.red.max(self.green).max(self.blue).max(self.label)
    }
}

/// Parse CSV text into palette entries, preserving row order.
pub(super) fn parse<R: Read>(
    reader: R,
    label_column: Option<&str>,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    let mut lines = BufReader::new(reader)
        .lines()
        .enumerate()
        .map(|(idx, line)| match line {
            Ok(text) => Ok((idx + 1, text.trim_end_matches('\r').to_string())),
            Err(e) => Err(PaletteError::malformed(0, e.to_string())),
        })
        .filter(|line| !matches!(line, Ok((_, text)) if text.trim().is_empty()));

    let columns = match lines.next() {
        Some(line) => {
            let (line_no, text) = line?;
            let text = text.trim_start_matches(BOM);
            let header = split_fields(text).map_err(|r| PaletteError::malformed(line_no, r))?;
            Columns::from_header(&header, label_column)?
        }
        None => return Err(PaletteError::malformed(1, "missing header row")),
    };

    let mut entries = Vec::new();
    for line in lines {
        let (line_no, text) = line?;
        let fields = split_fields(&text).map_err(|r| PaletteError::malformed(line_no, r))?;
        entries.push(parse_row(&fields, &columns, line_no)?);
    }

    if entries.is_empty() {
        return Err(PaletteError::EmptyPalette);
    }

    Ok(entries)
}

fn parse_row(fields: &[String], cols: &Columns, line_no: usize) -> Result<PaletteEntry, PaletteError> {
    if fields.len() <= cols.max_index() {
        return Err(PaletteError::malformed(
            line_no,
            format!(
                "expected at least {} fields, found {}",
                cols.max_index() + 1,
                fields.len()
            ),
        ));
    }

    let label = fields[cols.label].trim();
    if label.is_empty() {
        return Err(PaletteError::malformed(line_no, "empty label"));
    }

    let r = parse_channel(&fields[cols.red], "R", line_no)?;
    let g = parse_channel(&fields[cols.green], "G", line_no)?;
    let b = parse_channel(&fields[cols.blue], "B", line_no)?;

    let description = cols
        .description
        .and_then(|i| fields.get(i))
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(PaletteEntry {
        color: Rgba::opaque(r, g, b),
        label: label.to_string(),
        description,
    })
}

fn parse_channel(field: &str, channel: &str, line: usize) -> Result<u8, PaletteError> {
    let value = field.trim();
    if value.is_empty() {
        return Err(PaletteError::malformed(
            line,
            format!("missing value for channel {}", channel),
        ));
    }
    let parsed: i64 = value.parse().map_err(|_| {
        PaletteError::malformed(
            line,
            format!("channel {} is not an integer: {:?}", channel, value),
        )
    })?;
    u8::try_from(parsed).map_err(|_| {
        PaletteError::malformed(
            line,
            format!("channel {} out of range 0..=255: {}", channel, parsed),
        )
    })
}

/// Split one CSV line into fields.
///
/// Handles double-quoted fields containing commas and `""` escapes.
/// Quoted fields spanning several lines are not supported.
fn split_fields(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(current);
    Ok(fields)
}
