//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use stitchgrid::models::AppConfig;

/// A slice of the DMC chart, in chart order
pub const DMC_CSV: &str = "\
Floss,Description,R,G,B
310,Black,0,0,0
B5200,Snow White,255,255,255
666,Bright Red,227,29,66
321,Red,199,43,59
796,Royal Blue Dark,17,65,109
699,Green,5,101,23
307,Lemon,253,237,84
";

/// Palette used by the reference conversion
pub const RED_BLUE_CSV: &str = "Floss,R,G,B\nRed,255,0,0\nBlue,0,0,255\n";

/// Write `content` as `name` into `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Encode RGBA rows as an 8-bit RGBA PNG file
pub fn write_rgba_png(dir: &Path, name: &str, rows: &[Vec<[u8; 4]>]) -> PathBuf {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, Vec::len) as u32;
    let data: Vec<u8> = rows.iter().flatten().flatten().copied().collect();

    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&data).unwrap();
    writer.finish().unwrap();
    path
}

/// Config that reads `palette` and writes into `results`
pub fn config_for(palette: &Path, results: &Path) -> AppConfig {
    AppConfig {
        palette_file: palette.to_path_buf(),
        results_dir: results.to_path_buf(),
        ..Default::default()
    }
}

/// 4x3 sprite with a transparent border around a 2x1 red/blue body
pub fn bordered_sprite() -> Vec<Vec<[u8; 4]>> {
    let clear = [0, 0, 0, 0];
    vec![
        vec![clear, clear, clear, clear],
        vec![clear, [250, 10, 10, 255], [10, 10, 240, 255], clear],
        vec![clear, clear, clear, clear],
    ]
}
