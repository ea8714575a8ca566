//! Core data model definitions shared across the slideshow crates.
//!
//! Everything here is plain data: loading/offset state and the actions that
//! mutate it, item roles, navigation directions, thumbnail page snapshots and
//! the notification events a widget publishes. Behaviour lives in
//! `slideshow-core`.

pub mod direction;
pub mod events;
pub mod prelude;
pub mod role;
pub mod state;
pub mod thumbnails;

pub use direction::{Side, SlideDirection, SwipeDirection};
pub use events::{EventLabel, EventMetadata, SlideshowEvent};
pub use role::{ItemId, Role};
pub use state::{Action, LoadingState, Offset};
pub use thumbnails::{GradientMask, ThumbnailPage};
