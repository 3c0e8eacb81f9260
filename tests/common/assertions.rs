//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert a CSV file has exactly the given lines
pub fn assert_csv_lines(path: &Path, expected: &[&str]) {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected CSV at {}: {e}", path.display()));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, expected, "Unexpected content in {}", path.display());
}

/// Read a JSON file
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected JSON at {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap()
}
