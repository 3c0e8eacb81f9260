//! End-to-end conversion tests: PNG file in, pattern artifacts out.

mod common;

use common::fixtures;
use dmc_quantize::{QuantizeError, Rgba, SENTINEL};
use pretty_assertions::assert_eq;
use stitchgrid::error::ConvertError;
use stitchgrid::models::ColorSource;
use stitchgrid::rendering::decode_sprite_file;
use stitchgrid::services::ConvertPipeline;

#[test]
fn test_reference_conversion_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "palette.csv", fixtures::RED_BLUE_CSV);
    let results = dir.path().join("Results");
    let sprite = fixtures::write_rgba_png(
        dir.path(),
        "dot.png",
        &[vec![[250, 10, 10, 255]], vec![[0, 0, 0, 0]]],
    );

    let pipeline = ConvertPipeline::new(fixtures::config_for(&palette, &results)).unwrap();
    let output = pipeline.convert_file(&sprite).unwrap();

    assert_eq!(output.workbook, results.join("dot_pattern.html"));
    assert_eq!(output.report, results.join("dot_pattern.json"));
    assert_eq!(output.preview, results.join("dot_preview.png"));
    assert_eq!(output.csv_dir, results.join("dot_csv"));

    assert_eq!(output.pattern.symbol_grid(), vec![vec!["A"]]);

    common::assert_csv_lines(&output.csv_dir.join("symbols.csv"), &["A"]);
    common::assert_csv_lines(&output.csv_dir.join("real.csv"), &["FFFA0A0A"]);
    common::assert_csv_lines(&output.csv_dir.join("dmc.csv"), &["FFFF0000"]);
    common::assert_csv_lines(
        &output.csv_dir.join("legend.csv"),
        &[
            "Symbol,Floss,Description,Real,Dmc,Stitches",
            "A,Red,,#FFFA0A0A,#FFFF0000,1",
        ],
    );

    common::assert_png_file(&output.preview);

    let html = std::fs::read_to_string(&output.workbook).unwrap();
    assert!(html.contains(r#"<section id="REAL">"#));
    assert!(html.contains(r#"<section id="DMC">"#));
}

#[test]
fn test_json_legend_matches_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "DMC.csv", fixtures::DMC_CSV);
    let results = dir.path().join("out");
    let sprite = fixtures::write_rgba_png(dir.path(), "hero.png", &fixtures::bordered_sprite());

    let pipeline = ConvertPipeline::new(fixtures::config_for(&palette, &results)).unwrap();
    let output = pipeline.convert_file(&sprite).unwrap();
    let json = common::read_json(&output.report);

    assert_eq!(json["source"], "hero.png");
    assert_eq!(json["width"], 2);
    assert_eq!(json["height"], 1);

    let legend = json["legend"].as_array().unwrap();
    assert_eq!(legend.len(), output.pattern.legend().len());
    for (row, entry) in legend.iter().zip(output.pattern.legend()) {
        assert_eq!(row["symbol"], entry.symbol.to_string());
        assert_eq!(row["floss"], entry.label.as_str());
        assert_eq!(row["real"], entry.real_hex());
        assert_eq!(row["dmc"], entry.matched_hex());
    }
}

#[test]
fn test_border_is_cropped_and_threads_matched() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "DMC.csv", fixtures::DMC_CSV);
    let sprite = fixtures::write_rgba_png(dir.path(), "hero.png", &fixtures::bordered_sprite());

    let pipeline =
        ConvertPipeline::new(fixtures::config_for(&palette, &dir.path().join("out"))).unwrap();
    let image = decode_sprite_file(&sprite).unwrap();
    let pattern = pipeline.convert_sprite(&image).unwrap();

    assert_eq!((pattern.width(), pattern.height()), (2, 1));
    let labels: Vec<&str> = pattern.legend().iter().map(|e| e.label.as_str()).collect();
    // (250,10,10) is closest to 666 Bright Red, (10,10,240) to 796 Royal Blue Dark
    assert_eq!(labels, vec!["666", "796"]);
    assert_eq!(pattern.legend()[0].description.as_deref(), Some("Bright Red"));
}

#[test]
fn test_transparent_sprite_reports_no_visible_content() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "DMC.csv", fixtures::DMC_CSV);
    let results = dir.path().join("out");
    let sprite = fixtures::write_rgba_png(
        dir.path(),
        "empty.png",
        &vec![vec![[255, 255, 255, 0]; 3]; 2],
    );

    let pipeline = ConvertPipeline::new(fixtures::config_for(&palette, &results)).unwrap();
    let err = pipeline.convert_file(&sprite).unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Quantize(QuantizeError::NoVisibleContent)
    ));
    // Nothing is written for an empty sprite
    assert!(!results.exists());
}

#[test]
fn test_grids_align_in_csv_output() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "DMC.csv", fixtures::DMC_CSV);
    let clear = [0, 0, 0, 0];
    let sprite = fixtures::write_rgba_png(
        dir.path(),
        "ring.png",
        &[
            vec![[0, 0, 0, 255], [0, 0, 0, 255], [0, 0, 0, 255]],
            vec![[0, 0, 0, 255], clear, [255, 255, 255, 128]],
            vec![[0, 0, 0, 255], [0, 0, 0, 255], [0, 0, 0, 255]],
        ],
    );

    let pipeline =
        ConvertPipeline::new(fixtures::config_for(&palette, &dir.path().join("out"))).unwrap();
    let output = pipeline.convert_file(&sprite).unwrap();

    assert_eq!(output.pattern.symbol_grid()[1][1], SENTINEL);
    common::assert_csv_lines(
        &output.csv_dir.join("symbols.csv"),
        &["A,A,A", "A,,B", "A,A,A"],
    );
    common::assert_csv_lines(
        &output.csv_dir.join("real.csv"),
        &[
            "FF000000,FF000000,FF000000",
            "FF000000,,80FFFFFF",
            "FF000000,FF000000,FF000000",
        ],
    );
}

#[test]
fn test_preview_honours_config() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "palette.csv", fixtures::RED_BLUE_CSV);
    let sprite = fixtures::write_rgba_png(dir.path(), "dot.png", &[vec![[250, 10, 10, 255]]]);

    let mut config = fixtures::config_for(&palette, &dir.path().join("out"));
    config.preview.cell_size = 3;
    config.preview.colors = ColorSource::Real;

    let output = ConvertPipeline::new(config)
        .unwrap()
        .convert_file(&sprite)
        .unwrap();
    let preview = decode_sprite_file(&output.preview).unwrap();

    assert_eq!((preview.width(), preview.height()), (3, 3));
    assert_eq!(preview.get(2, 2), Some(Rgba::opaque(250, 10, 10)));
}

#[test]
fn test_custom_alphabet_in_output() {
    let dir = tempfile::tempdir().unwrap();
    let palette = fixtures::write_file(dir.path(), "palette.csv", fixtures::RED_BLUE_CSV);
    let sprite = fixtures::write_rgba_png(
        dir.path(),
        "pair.png",
        &[vec![[255, 0, 0, 255], [0, 0, 255, 255]]],
    );

    let mut config = fixtures::config_for(&palette, &dir.path().join("out"));
    config.alphabet = Some("XO".to_string());

    let output = ConvertPipeline::new(config)
        .unwrap()
        .convert_file(&sprite)
        .unwrap();
    common::assert_csv_lines(&output.csv_dir.join("symbols.csv"), &["X,O"]);
}
