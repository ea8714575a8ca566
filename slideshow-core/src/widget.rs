//! One slideshow instance, as a host embeds it.
//!
//! [`Slideshow`] owns the transition engine, the per-instance store and the
//! thumbnail strip, and republishes store changes on its event bus as
//! `loading-change` and `offset-change`. Dropping it tears its store
//! subscriptions down.

use slideshow_model::{
    EventLabel, EventMetadata, ItemId, LoadingState, Offset, SlideDirection,
    SlideshowEvent, SwipeDirection, ThumbnailPage,
};
use tokio::sync::broadcast;
use tracing::{debug, instrument};

use crate::engine::SlideTransitionEngine;
use crate::error::Result;
use crate::events::EventBus;
use crate::options::SlideshowOptions;
use crate::paginator::{ThumbnailPaginator, ThumbnailStrip};
use crate::store::{StateStore, SubscriptionId};
use crate::surface::{HostEvent, SlideSurface};

#[derive(Debug)]
pub struct Slideshow<S> {
    engine: SlideTransitionEngine<S>,
    options: SlideshowOptions,
    thumbnails: Option<ThumbnailStrip>,
    subscriptions: Vec<SubscriptionId>,
}

impl<S: SlideSurface> Slideshow<S> {
    /// Validates `options` and creates a widget with its own event bus.
    pub fn new(surface: S, options: SlideshowOptions) -> Result<Self> {
        // A zero-capacity broadcast channel panics, so validate first.
        options.validate()?;
        let events = EventBus::new(options.event_capacity);
        Ok(Self::assemble(surface, options, events))
    }

    /// Like [`Self::new`], publishing on a bus the host already listens to.
    ///
    /// Receivers subscribed before this call see the initial
    /// `loading-change` and `offset-change` notifications.
    pub fn with_event_bus(
        surface: S,
        options: SlideshowOptions,
        events: EventBus,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self::assemble(surface, options, events))
    }

    fn assemble(
        surface: S,
        options: SlideshowOptions,
        events: EventBus,
    ) -> Self {
        let mut store = StateStore::new();
        let loading_bus = events.clone();
        let loading = store.select_loading(move |state| {
            loading_bus.publish(SlideshowEvent::loading_change(state));
        });
        let offset_bus = events.clone();
        let offset = store.select_offset(move |offset| {
            offset_bus.publish(SlideshowEvent::offset_change(offset));
        });

        Self {
            engine: SlideTransitionEngine::new(surface, store, events),
            options,
            thumbnails: None,
            subscriptions: vec![loading, offset],
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SlideshowEvent> {
        self.engine.events().subscribe()
    }

    /// Move one slide, optionally on behalf of a host input event whose
    /// default handling is suppressed.
    pub fn request_move(
        &mut self,
        direction: SlideDirection,
        origin: Option<&mut dyn HostEvent>,
    ) -> Result<()> {
        self.engine.request_move_from(direction, origin)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.engine.jump_to(index)
    }

    pub fn on_swipe(&mut self, swipe: SwipeDirection) -> Result<()> {
        self.engine.on_swipe(swipe)
    }

    pub fn on_transition_end(&mut self, item: ItemId) -> Result<()> {
        self.engine.on_transition_end(item)
    }

    pub fn finalize_transition(&mut self) -> Result<()> {
        self.engine.finalize_transition()
    }

    /// Measure the thumbnail strip and lay it out.
    ///
    /// The first call starts on page 1; later calls re-measure and keep the
    /// page the strip is on. Fails when no usable thumbnail width is
    /// configured.
    #[instrument(level = "debug", skip(self))]
    pub fn initialize_thumbnails(&mut self) -> Result<ThumbnailPage> {
        let paginator = self.measure_thumbnails()?;
        let page = match self.thumbnails.as_mut() {
            Some(strip) => *strip.reinitialize(paginator),
            None => {
                let strip = ThumbnailStrip::new(paginator);
                let page = *strip.page();
                self.thumbnails = Some(strip);
                page
            }
        };
        self.engine.surface_mut().apply_thumbnail_page(&page);
        Ok(page)
    }

    /// Page the thumbnail strip, measuring it first if needed.
    ///
    /// Returns `None` when the strip is already at that edge; nothing is
    /// emitted then.
    pub fn move_thumbnail_page(
        &mut self,
        direction: SlideDirection,
    ) -> Result<Option<ThumbnailPage>> {
        if self.thumbnails.is_none() {
            self.initialize_thumbnails()?;
        }
        let Some(page) = self
            .thumbnails
            .as_mut()
            .and_then(|strip| strip.move_page(direction).copied())
        else {
            return Ok(None);
        };

        self.engine.surface_mut().apply_thumbnail_page(&page);
        let label = match direction {
            SlideDirection::Next => EventLabel::MoveThumbnailsRight,
            SlideDirection::Previous => EventLabel::MoveThumbnailsLeft,
        };
        self.engine
            .events()
            .emit_with(label, EventMetadata::Thumbnails(page));
        Ok(Some(page))
    }

    /// Host render pass finished. Re-measures the thumbnail strip when
    /// thumbnails are shown.
    pub fn after_view_checked(&mut self) -> Result<()> {
        if self.options.show_thumbnails {
            self.initialize_thumbnails()?;
        }
        Ok(())
    }

    fn measure_thumbnails(&self) -> Result<ThumbnailPaginator> {
        let surface = self.engine.surface();
        let container_width = surface.thumbnail_strip_width().unwrap_or(0.0);
        Ok(ThumbnailPaginator::new(
            container_width,
            self.options.thumbnail_width,
            surface.item_count(),
        )?
        .with_pre_scrolled_pages(self.options.pre_scrolled_pages))
    }
}

impl<S> Slideshow<S> {
    pub fn loading_state(&self) -> LoadingState {
        self.engine.loading_state()
    }

    pub fn offset(&self) -> Offset {
        self.engine.offset()
    }

    pub fn options(&self) -> &SlideshowOptions {
        &self.options
    }

    pub fn thumbnail_page(&self) -> Option<&ThumbnailPage> {
        self.thumbnails.as_ref().map(ThumbnailStrip::page)
    }

    pub fn engine(&self) -> &SlideTransitionEngine<S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SlideTransitionEngine<S> {
        &mut self.engine
    }

    pub fn surface(&self) -> &S {
        self.engine.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.engine.surface_mut()
    }

    /// Remove the widget's store subscriptions. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        let store = self.engine.store_mut();
        for id in self.subscriptions.drain(..) {
            store.unsubscribe(id);
        }
        debug!("slideshow disposed");
    }
}

impl<S> Drop for Slideshow<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
