//! Slide transition state machine.
//!
//! ```text
//! READY --request_move / jump_to--> SLIDING --finalize_transition--> READY
//! ```
//!
//! The engine keeps no state of its own between calls. The active slide is
//! always re-read from the [`SlideSurface`]; the offset counter in the
//! [`StateStore`] is only ever moved by unit steps and is never trusted as a
//! pointer to the active slide, since it can drift from what is painted.
//!
//! A transition starts with `request_move` or `jump_to`, which leave one slide
//! `incoming` and the previous one `outgoing-*`. It ends when the surface
//! reports that one of those slides finished animating
//! ([`SlideTransitionEngine::on_transition_end`]); the roles are then settled
//! and the store goes back to `READY`. There is no timeout: a surface that
//! never reports completion leaves the engine `SLIDING`.

use slideshow_model::{
    Action, EventLabel, ItemId, LoadingState, Offset, Role, Side,
    SlideDirection, SlideshowEvent,
};
use tracing::{debug, info, trace};

use crate::element_cache::ElementCache;
use crate::error::{Result, SlideshowError};
use crate::events::EventBus;
use crate::store::StateStore;
use crate::surface::{HostEvent, Selector, SlideSurface};

#[derive(Debug)]
pub struct SlideTransitionEngine<S> {
    surface: S,
    store: StateStore,
    cache: ElementCache,
    events: EventBus,
}

impl<S> SlideTransitionEngine<S> {
    pub fn new(surface: S, store: StateStore, events: EventBus) -> Self {
        Self {
            surface,
            store,
            cache: ElementCache::new(),
            events,
        }
    }

    pub fn loading_state(&self) -> LoadingState {
        self.store.loading()
    }

    pub fn offset(&self) -> Offset {
        self.store.offset()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that repaint or restructure the deck.
    ///
    /// Call [`Self::rebuild_element_cache`] after changing the number of
    /// slides.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn rebuild_element_cache(&mut self) {
        self.cache = ElementCache::new();
    }

    pub fn into_parts(self) -> (S, StateStore) {
        (self.surface, self.store)
    }
}

impl<S: SlideSurface> SlideTransitionEngine<S> {
    /// Move one slide in `direction`.
    ///
    /// A no-op when the active slide has no neighbor that way or a transition
    /// is already in flight.
    pub fn request_move(&mut self, direction: SlideDirection) -> Result<()> {
        let active = self.active_item()?;
        let neighbor = active
            .neighbor(direction.neighbor_side(), self.surface.item_count());

        let Some(neighbor) = neighbor else {
            debug!(%active, %direction, "no neighbor to move to");
            return Ok(());
        };

        if self.store.loading().is_sliding() {
            debug!(%active, %direction, "transition in flight, ignoring move");
            return Ok(());
        }

        self.store.dispatch(Action::Sliding);
        self.store.dispatch(match direction {
            SlideDirection::Next => Action::Increment,
            SlideDirection::Previous => Action::Decrement,
        });

        self.surface
            .set_role(active, Role::outgoing(direction.exit_side()));
        self.surface.set_role(neighbor, Role::Incoming);

        info!(from = %active, to = %neighbor, %direction, "slide started");
        self.events.emit(match direction {
            SlideDirection::Next => EventLabel::SlideNext,
            SlideDirection::Previous => EventLabel::SlidePrevious,
        });
        Ok(())
    }

    /// [`Self::request_move`] on behalf of a host input event, whose default
    /// handling is suppressed first.
    pub fn request_move_from(
        &mut self,
        direction: SlideDirection,
        origin: Option<&mut dyn HostEvent>,
    ) -> Result<()> {
        if let Some(event) = origin {
            event.prevent_default();
        }
        self.request_move(direction)
    }

    /// Completion signal from the surface for `item`.
    ///
    /// Only slides taking part in the current transition can complete it;
    /// signals from any other slide are ignored.
    pub fn on_transition_end(&mut self, item: ItemId) -> Result<()> {
        match self.surface.role_of(item) {
            Some(role) if role.is_transient() => self.finalize_transition(),
            role => {
                trace!(%item, ?role, "ignoring transition end");
                Ok(())
            }
        }
    }

    /// Settle the roles of the pending transition and go back to `READY`.
    ///
    /// Fails when no slide is `incoming`, i.e. there is nothing to finalize.
    pub fn finalize_transition(&mut self) -> Result<()> {
        let incoming = self
            .surface
            .query_one(Selector::Role(Role::Incoming))
            .ok_or(SlideshowError::NoActiveItem(
                "no pending transition to finalize",
            ))?;
        let len = self.surface.item_count();

        self.surface.set_role(incoming, Role::Active);
        for side in [Side::Left, Side::Right] {
            if let Some(neighbor) = incoming.neighbor(side, len) {
                self.surface.set_role(neighbor, Role::inactive(side));
            }
        }

        // A jump can leave its outgoing slide anywhere in the deck.
        for stray in self.surface.query(Selector::Transient) {
            let side = if stray < incoming {
                Side::Left
            } else {
                Side::Right
            };
            self.surface.set_role(stray, Role::inactive(side));
        }

        self.store.dispatch(Action::Ready);
        info!(active = %incoming, "transition complete");
        self.events.emit(EventLabel::ActiveTransitionComplete);
        Ok(())
    }

    /// Bring slide `target` in directly, repositioning every other slide.
    ///
    /// The offset is walked to `target` with unit steps, starting from a reset
    /// when moving forward. Unlike [`Self::request_move`] this does not check
    /// for a transition in flight; callers are expected to jump only when the
    /// engine is not `SLIDING`.
    pub fn jump_to(&mut self, target: usize) -> Result<()> {
        let items = self
            .cache
            .resolve(&self.surface, Selector::Items, true)
            .into_items();
        if target >= items.len() {
            return Err(SlideshowError::IndexOutOfRange {
                index: target,
                len: items.len(),
            });
        }
        let previous = self.active_item()?;
        let current = self.store.offset();
        let target_item = ItemId(target);

        self.store.dispatch(Action::Sliding);

        for &item in &items {
            if item < target_item {
                self.move_to(item, Side::Left);
            } else if item > target_item {
                self.move_to(item, Side::Right);
            }
        }

        let exit = if target as Offset > current {
            self.store.dispatch(Action::Reset);
            self.store.dispatch_repeated(Action::Increment, target);
            Side::Left
        } else {
            let steps = usize::try_from(current - target as Offset)
                .unwrap_or_default();
            self.store.dispatch_repeated(Action::Decrement, steps);
            Side::Right
        };

        self.slide_out(previous, exit);
        self.slide_in(target_item);

        info!(
            from = %previous,
            to = %target_item,
            offset = self.store.offset(),
            "jumped"
        );
        self.events.publish(SlideshowEvent::slide_in_by_index(target));
        Ok(())
    }

    fn active_item(&self) -> Result<ItemId> {
        self.surface
            .query_one(Selector::Active)
            .ok_or(SlideshowError::NoActiveItem("no slide is marked active"))
    }

    fn move_to(&mut self, item: ItemId, side: Side) {
        self.surface.set_role(item, Role::inactive(side));
        self.events.emit(match side {
            Side::Left => EventLabel::MoveLeft,
            Side::Right => EventLabel::MoveRight,
        });
    }

    fn slide_out(&mut self, item: ItemId, side: Side) {
        self.surface.set_role(item, Role::outgoing(side));
        self.events.emit(match side {
            Side::Left => EventLabel::SlideLeft,
            Side::Right => EventLabel::SlideRight,
        });
    }

    fn slide_in(&mut self, item: ItemId) {
        self.surface.set_role(item, Role::Incoming);
        self.events.emit(EventLabel::SlideIn);
    }
}
