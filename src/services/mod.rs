pub mod convert_pipeline;
pub mod palette_service;

pub use convert_pipeline::{ConvertOutput, ConvertPipeline};
pub use palette_service::load_palette;
