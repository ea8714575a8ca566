//! Option loading for slideshow widgets.
//!
//! Options come from, in order: the file named by `$SLIDESHOW_CONFIG_PATH`
//! (TOML or JSON), inline JSON in `$SLIDESHOW_CONFIG_JSON`, or the built-in
//! defaults. Whatever the source, the options are validated before they are
//! handed out.

pub mod error;
pub mod loader;

pub use error::ConfigLoadError;
pub use loader::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigLoad, SlideshowConfigSource,
    load_from_env, load_from_file, load_with, parse_from_str, parse_json,
};
pub use slideshow_core::SlideshowOptions;
