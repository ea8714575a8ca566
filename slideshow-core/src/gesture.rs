//! Swipe input mapped onto slide moves.

use slideshow_model::{
    EventLabel, EventMetadata, SlideDirection, SwipeDirection,
};
use tracing::debug;

use crate::engine::SlideTransitionEngine;
use crate::error::Result;
use crate::surface::SlideSurface;

/// Swiping left reveals the next slide, swiping right the previous one.
pub fn slide_direction_for(swipe: SwipeDirection) -> SlideDirection {
    match swipe {
        SwipeDirection::Left => SlideDirection::Next,
        SwipeDirection::Right => SlideDirection::Previous,
    }
}

fn swipe_label(swipe: SwipeDirection) -> EventLabel {
    match swipe {
        SwipeDirection::Left => EventLabel::SwipeNext,
        SwipeDirection::Right => EventLabel::SwipePrevious,
    }
}

impl<S: SlideSurface> SlideTransitionEngine<S> {
    /// Forward a swipe to [`Self::request_move`] and report it tagged with
    /// the swipe itself.
    ///
    /// The swipe notification follows whatever the move emitted, and is sent
    /// even when the move was a no-op. It is not sent when the move failed.
    pub fn on_swipe(&mut self, swipe: SwipeDirection) -> Result<()> {
        let direction = slide_direction_for(swipe);
        debug!(%swipe, %direction, "swipe");
        self.request_move(direction)?;
        self.events()
            .emit_with(swipe_label(swipe), EventMetadata::Swipe { swipe });
        Ok(())
    }
}
