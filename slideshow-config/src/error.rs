use std::path::PathBuf;

use slideshow_core::SlideshowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {origin}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse {origin} as TOML ({toml}) or JSON ({json})"
    )]
    Unparseable {
        origin: String,
        toml: String,
        json: String,
    },
    #[error(transparent)]
    Invalid(#[from] SlideshowError),
}
