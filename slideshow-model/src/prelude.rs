//! Flat re-export of the model surface for integration code.

pub use super::direction::{Side, SlideDirection, SwipeDirection};
pub use super::events::{EventLabel, EventMetadata, SlideshowEvent};
pub use super::role::{ItemId, Role};
pub use super::state::{Action, LoadingState, Offset};
pub use super::thumbnails::{GradientMask, ThumbnailPage};
