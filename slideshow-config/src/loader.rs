use std::{
    env, fs,
    path::{Path, PathBuf},
};

use slideshow_core::SlideshowOptions;
use tracing::{debug, info};

use crate::error::ConfigLoadError;

pub const CONFIG_PATH_ENV: &str = "SLIDESHOW_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "SLIDESHOW_CONFIG_JSON";

/// Where the effective options came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlideshowConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Validated options together with their source.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLoad {
    pub options: SlideshowOptions,
    pub source: SlideshowConfigSource,
}

/// Load options using the process environment.
/// Evaluation order:
/// 1) `$SLIDESHOW_CONFIG_PATH` (TOML or JSON file),
/// 2) `$SLIDESHOW_CONFIG_JSON` (inline JSON),
/// 3) defaults if neither is set.
pub fn load_from_env() -> Result<ConfigLoad, ConfigLoadError> {
    load_with(|key| env::var(key).ok())
}

/// [`load_from_env`] with variables read through `lookup`. Blank values count
/// as unset.
pub fn load_with<F>(lookup: F) -> Result<ConfigLoad, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let load = if let Some(path) = set(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(ConfigLoadError::MissingConfig { path });
        }
        ConfigLoad {
            options: load_from_file(&path)?,
            source: SlideshowConfigSource::EnvPath(path),
        }
    } else if let Some(raw) = set(CONFIG_JSON_ENV) {
        ConfigLoad {
            options: parse_json(&raw, CONFIG_JSON_ENV)?,
            source: SlideshowConfigSource::EnvInline,
        }
    } else {
        debug!("no slideshow configuration set, using defaults");
        ConfigLoad {
            options: SlideshowOptions::default(),
            source: SlideshowConfigSource::Default,
        }
    };

    info!(source = ?load.source, "slideshow options loaded");
    Ok(load)
}

/// Read and validate an options file. The extension picks the format; files
/// without a known one are tried as TOML, then JSON.
pub fn load_from_file(path: &Path) -> Result<SlideshowOptions, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            let options: SlideshowOptions = toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml {
                    origin: origin.clone(),
                    source,
                })?;
            options.validate()?;
            Ok(options)
        }
        _ => parse_from_str(&contents, &origin),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<SlideshowOptions, ConfigLoadError> {
    let options: SlideshowOptions =
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unparseable {
                    origin: origin.to_string(),
                    toml: toml_err.to_string(),
                    json: json_err.to_string(),
                }
            })
        })?;
    options.validate()?;
    Ok(options)
}

pub fn parse_json(
    raw: &str,
    origin: &str,
) -> Result<SlideshowOptions, ConfigLoadError> {
    let options: SlideshowOptions =
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })?;
    options.validate()?;
    Ok(options)
}
