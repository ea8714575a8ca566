//! Notification events published by a slideshow widget.
//!
//! Labels keep the kebab-case names host integrations listen for
//! (`slide-next`, `offset-change`, ...). Metadata is optional and only carried
//! by the events that have something to say beyond their label.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::direction::SwipeDirection;
use crate::state::{LoadingState, Offset};
use crate::thumbnails::ThumbnailPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EventLabel {
    SlideNext,
    SlidePrevious,
    ActiveTransitionComplete,
    SwipeNext,
    SwipePrevious,
    MoveLeft,
    MoveRight,
    SlideLeft,
    SlideRight,
    SlideIn,
    SlideInByIndex,
    MoveThumbnailsRight,
    MoveThumbnailsLeft,
    LoadingChange,
    OffsetChange,
}

impl EventLabel {
    pub const ALL: [Self; 15] = [
        Self::SlideNext,
        Self::SlidePrevious,
        Self::ActiveTransitionComplete,
        Self::SwipeNext,
        Self::SwipePrevious,
        Self::MoveLeft,
        Self::MoveRight,
        Self::SlideLeft,
        Self::SlideRight,
        Self::SlideIn,
        Self::SlideInByIndex,
        Self::MoveThumbnailsRight,
        Self::MoveThumbnailsLeft,
        Self::LoadingChange,
        Self::OffsetChange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventLabel::SlideNext => "slide-next",
            EventLabel::SlidePrevious => "slide-previous",
            EventLabel::ActiveTransitionComplete => {
                "active-transition-complete"
            }
            EventLabel::SwipeNext => "swipe-next",
            EventLabel::SwipePrevious => "swipe-previous",
            EventLabel::MoveLeft => "move-left",
            EventLabel::MoveRight => "move-right",
            EventLabel::SlideLeft => "slide-left",
            EventLabel::SlideRight => "slide-right",
            EventLabel::SlideIn => "slide-in",
            EventLabel::SlideInByIndex => "slide-in-by-index",
            EventLabel::MoveThumbnailsRight => "move-thumbnails-right",
            EventLabel::MoveThumbnailsLeft => "move-thumbnails-left",
            EventLabel::LoadingChange => "loading-change",
            EventLabel::OffsetChange => "offset-change",
        }
    }
}

impl Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventLabel(pub String);

impl Display for UnknownEventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event label '{}'", self.0)
    }
}

impl std::error::Error for UnknownEventLabel {}

impl FromStr for EventLabel {
    type Err = UnknownEventLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownEventLabel(s.to_string()))
    }
}

/// Extra payload attached to some events.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EventMetadata {
    /// Target of a direct jump.
    Index { index: usize },
    /// Swipe that triggered a move, as the user performed it.
    Swipe { swipe: SwipeDirection },
    Loading(LoadingState),
    Offset(Offset),
    Thumbnails(ThumbnailPage),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideshowEvent {
    pub label: EventLabel,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub metadata: Option<EventMetadata>,
}

impl SlideshowEvent {
    pub fn new(label: EventLabel) -> Self {
        Self {
            label,
            metadata: None,
        }
    }

    pub fn with_metadata(label: EventLabel, metadata: EventMetadata) -> Self {
        Self {
            label,
            metadata: Some(metadata),
        }
    }

    pub fn slide_in_by_index(index: usize) -> Self {
        Self::with_metadata(
            EventLabel::SlideInByIndex,
            EventMetadata::Index { index },
        )
    }

    pub fn loading_change(state: LoadingState) -> Self {
        Self::with_metadata(
            EventLabel::LoadingChange,
            EventMetadata::Loading(state),
        )
    }

    pub fn offset_change(offset: Offset) -> Self {
        Self::with_metadata(
            EventLabel::OffsetChange,
            EventMetadata::Offset(offset),
        )
    }
}

impl Display for SlideshowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.metadata {
            None => write!(f, "{}", self.label),
            Some(EventMetadata::Index { index }) => {
                write!(f, "{} index={}", self.label, index)
            }
            Some(EventMetadata::Swipe { swipe }) => {
                write!(f, "{} swipe={}", self.label, swipe)
            }
            Some(EventMetadata::Loading(state)) => {
                write!(f, "{} {}", self.label, state)
            }
            Some(EventMetadata::Offset(offset)) => {
                write!(f, "{} {}", self.label, offset)
            }
            Some(EventMetadata::Thumbnails(page)) => write!(
                f,
                "{} page={} left={}",
                self.label, page.current_page, page.left_offset
            ),
        }
    }
}
