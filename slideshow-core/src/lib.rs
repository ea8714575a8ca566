//! Transition engine for embeddable slideshows.
//!
//! The crate decides which role every slide moves to when the user steps,
//! swipes or jumps through a deck, keeps at most one transition in flight, and
//! pages the thumbnail strip. It never paints: hosts implement
//! [`SlideSurface`] and feed completion and gesture signals back in.
//!
//! ```
//! use slideshow_core::{MemoryDeck, Slideshow, SlideshowOptions};
//! use slideshow_model::{ItemId, LoadingState, SlideDirection};
//!
//! let mut show =
//!     Slideshow::new(MemoryDeck::new(5, 0), SlideshowOptions::default())?;
//! show.request_move(SlideDirection::Next, None)?;
//! assert_eq!(show.loading_state(), LoadingState::Sliding);
//!
//! show.on_transition_end(ItemId(1))?;
//! assert_eq!(show.loading_state(), LoadingState::Ready);
//! assert_eq!(show.offset(), 1);
//! # Ok::<(), slideshow_core::SlideshowError>(())
//! ```

pub mod element_cache;
pub mod engine;
pub mod error;
pub mod events;
pub mod gesture;
pub mod memory;
pub mod options;
pub mod paginator;
pub mod store;
pub mod surface;
pub mod widget;

pub use element_cache::{ElementCache, Resolved};
pub use engine::SlideTransitionEngine;
pub use error::{Result, SlideshowError};
pub use events::{DEFAULT_EVENT_CAPACITY, EventBus, drain};
pub use gesture::slide_direction_for;
pub use memory::MemoryDeck;
pub use options::SlideshowOptions;
pub use paginator::{ThumbnailPaginator, ThumbnailStrip};
pub use store::{
    Slice, StateChange, StateStore, SubscriptionId, loading_reducer,
    offset_reducer,
};
pub use surface::{HostEvent, Selector, SlideSurface};
pub use widget::Slideshow;
