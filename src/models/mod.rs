pub mod config;

pub use config::{AppConfig, ColorSource, PreviewConfig, DEFAULT_CONFIG_FILE};
