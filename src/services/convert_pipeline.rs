use std::path::{Path, PathBuf};

use dmc_quantize::{Palette, Pattern, QuantizeError, Sprite, StitchPatterner};

use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::rendering::{csv_export, decode_sprite_file, encode_preview, render_workbook, PatternReport};
use crate::services::palette_service::load_palette;

/// Files written for one converted sprite
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    pub pattern: Pattern,
    /// `<stem>_pattern.html`
    pub workbook: PathBuf,
    /// `<stem>_pattern.json`
    pub report: PathBuf,
    /// `<stem>_preview.png`
    pub preview: PathBuf,
    /// `<stem>_csv/`
    pub csv_dir: PathBuf,
}

/// Conversion pipeline that orchestrates decode → crop/encode → export
pub struct ConvertPipeline {
    config: AppConfig,
    patterner: StitchPatterner,
}

impl ConvertPipeline {
    /// Load the configured palette and build the pipeline
    pub fn new(config: AppConfig) -> Result<Self, ConvertError> {
        let palette = load_palette(&config.palette_file, config.label_column.as_deref())?;
        Self::with_palette(config, palette)
    }

    /// Build the pipeline around an already loaded palette
    pub fn with_palette(config: AppConfig, palette: Palette) -> Result<Self, ConvertError> {
        let alphabet = config.symbol_alphabet().map_err(QuantizeError::from)?;
        let patterner = StitchPatterner::new(palette).alphabet(alphabet);

        Ok(Self { config, patterner })
    }

    /// Crop and encode an in-memory sprite
    pub fn convert_sprite(&self, sprite: &Sprite) -> Result<Pattern, ConvertError> {
        let pattern = self.patterner.convert(sprite)?;

        tracing::debug!(
            width = pattern.width(),
            height = pattern.height(),
            threads = pattern.legend().len(),
            "Pattern encoded"
        );

        Ok(pattern)
    }

    /// Convert a PNG file and write every artifact into the results directory
    pub fn convert_file(&self, sprite_path: &Path) -> Result<ConvertOutput, ConvertError> {
        let sprite = decode_sprite_file(sprite_path)?;
        tracing::info!(
            path = %sprite_path.display(),
            width = sprite.width(),
            height = sprite.height(),
            "Read sprite"
        );

        let pattern = self.convert_sprite(&sprite)?;

        let stem = sprite_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("sprite");
        let source = sprite_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);

        self.write_outputs(pattern, stem, source)
    }

    /// Write the HTML workbook, JSON report, PNG preview and CSV sheets
    pub fn write_outputs(
        &self,
        pattern: Pattern,
        stem: &str,
        source: &str,
    ) -> Result<ConvertOutput, ConvertError> {
        let results = &self.config.results_dir;
        std::fs::create_dir_all(results)?;

        let workbook = results.join(format!("{stem}_pattern.html"));
        std::fs::write(&workbook, render_workbook(&pattern, stem)?)?;

        let palette_name = self.config.palette_file.display().to_string();
        let report = results.join(format!("{stem}_pattern.json"));
        std::fs::write(
            &report,
            PatternReport::new(&pattern, source, &palette_name).to_json()?,
        )?;

        let preview = results.join(format!("{stem}_preview.png"));
        let preview_cfg = &self.config.preview;
        std::fs::write(
            &preview,
            encode_preview(&pattern, preview_cfg.colors, preview_cfg.cell_size)?,
        )?;

        let csv_dir = results.join(format!("{stem}_csv"));
        csv_export::write_csv_sheets(&pattern, &csv_dir)?;

        tracing::info!(
            workbook = %workbook.display(),
            threads = pattern.legend().len(),
            stitches = pattern.stitch_count(),
            "Pattern written"
        );

        Ok(ConvertOutput {
            pattern,
            workbook,
            report,
            preview,
            csv_dir,
        })
    }

    /// The patterner in use
    pub fn patterner(&self) -> &StitchPatterner {
        &self.patterner
    }

    /// Get the config
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
