use serde::{Deserialize, Serialize};

use crate::error::{Result, SlideshowError};
use crate::events::DEFAULT_EVENT_CAPACITY;

fn default_show_dots() -> bool {
    true
}

fn default_height() -> f64 {
    500.0
}

fn default_event_capacity() -> usize {
    DEFAULT_EVENT_CAPACITY
}

/// Host-facing widget options.
///
/// Field names follow the host option map (`showDots`, `thumbnailWidth`, ...)
/// and every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideshowOptions {
    /// Render the dot navigation under the deck.
    #[serde(default = "default_show_dots")]
    pub show_dots: bool,
    /// Deck height in pixels.
    #[serde(default = "default_height")]
    pub height: f64,
    pub show_thumbnails: bool,
    /// Width of one thumbnail in pixels. Required when `show_thumbnails` is
    /// set.
    pub thumbnail_width: Option<f64>,
    /// Pages the thumbnail strip starts pre-scrolled by; widens every page
    /// step.
    pub pre_scrolled_pages: u32,
    /// Buffered notifications per event receiver before the oldest are
    /// dropped.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            show_dots: default_show_dots(),
            height: default_height(),
            show_thumbnails: false,
            thumbnail_width: None,
            pre_scrolled_pages: 0,
            event_capacity: default_event_capacity(),
        }
    }
}

impl SlideshowOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(SlideshowError::InvalidConfiguration(format!(
                "height must be a positive number, got {}",
                self.height
            )));
        }

        if self.show_thumbnails {
            match self.thumbnail_width {
                Some(width) if width.is_finite() && width > 0.0 => {}
                Some(width) => {
                    return Err(SlideshowError::InvalidConfiguration(format!(
                        "thumbnailWidth must be a positive number, got {width}"
                    )));
                }
                None => {
                    return Err(SlideshowError::InvalidConfiguration(
                        "thumbnailWidth is required when showThumbnails is set"
                            .into(),
                    ));
                }
            }
        }

        if self.event_capacity == 0 {
            return Err(SlideshowError::InvalidConfiguration(
                "eventCapacity must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_option_map_uses_defaults() {
        let options: SlideshowOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SlideshowOptions::default());
        assert!(options.show_dots);
        assert_eq!(options.height, 500.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn host_option_names_deserialize() {
        let options: SlideshowOptions = serde_json::from_str(
            r#"{"showDots": false, "showThumbnails": true, "thumbnailWidth": 120}"#,
        )
        .unwrap();
        assert!(!options.show_dots);
        assert_eq!(options.thumbnail_width, Some(120.0));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn thumbnails_need_a_width() {
        let mut options = SlideshowOptions {
            show_thumbnails: true,
            ..SlideshowOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(SlideshowError::InvalidConfiguration(_))
        ));

        options.thumbnail_width = Some(-1.0);
        assert!(options.validate().is_err());

        options.show_thumbnails = false;
        assert!(options.validate().is_ok());
    }

    #[test]
    fn height_must_be_positive() {
        let options = SlideshowOptions {
            height: 0.0,
            ..SlideshowOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
