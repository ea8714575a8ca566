//! Boundary with the host rendering layer.
//!
//! The engine never paints anything. It asks a [`SlideSurface`] which roles
//! the slides currently carry, tells it which roles they move to, and hands
//! it thumbnail page layouts. Hosts implement the three required methods and
//! may override the queries when they can answer them faster than a scan.

use slideshow_model::{ItemId, Role, ThumbnailPage};

/// Structural lookups the engine performs against the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Every slide in deck order.
    Items,
    /// The slide carrying `active` or `incoming`.
    Active,
    /// Slides carrying a role that only exists mid-transition.
    Transient,
    /// Slides carrying exactly this role.
    Role(Role),
}

impl Selector {
    pub fn matches(&self, role: Option<Role>) -> bool {
        match self {
            Selector::Items => true,
            Selector::Active => role.is_some_and(|role| role.is_active()),
            Selector::Transient => {
                role.is_some_and(|role| role.is_transient())
            }
            Selector::Role(wanted) => role == Some(*wanted),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait SlideSurface {
    /// Number of slides in the deck.
    fn item_count(&self) -> usize;

    /// Role currently painted on `item`, `None` when the item carries none
    /// or does not exist.
    fn role_of(&self, item: ItemId) -> Option<Role>;

    fn set_role(&mut self, item: ItemId, role: Role);

    fn query(&self, selector: Selector) -> Vec<ItemId> {
        (0..self.item_count())
            .map(ItemId)
            .filter(|item| selector.matches(self.role_of(*item)))
            .collect()
    }

    fn query_one(&self, selector: Selector) -> Option<ItemId> {
        (0..self.item_count())
            .map(ItemId)
            .find(|item| selector.matches(self.role_of(*item)))
    }

    /// Measured width of the thumbnail strip container. `None` until laid out.
    fn thumbnail_strip_width(&self) -> Option<f64> {
        None
    }

    fn apply_thumbnail_page(&mut self, _page: &ThumbnailPage) {}
}

/// Input event that triggered a navigation request.
pub trait HostEvent {
    /// Stop the host from running its own default handling of the event.
    fn prevent_default(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_selector_includes_incoming() {
        assert!(Selector::Active.matches(Some(Role::Incoming)));
        assert!(Selector::Active.matches(Some(Role::Active)));
        assert!(!Selector::Active.matches(Some(Role::OutgoingLeft)));
        assert!(!Selector::Active.matches(None));
    }

    #[test]
    fn items_selector_matches_unmarked_slides() {
        assert!(Selector::Items.matches(None));
        assert!(Selector::Transient.matches(Some(Role::OutgoingRight)));
        assert!(!Selector::Role(Role::Active).matches(Some(Role::Incoming)));
    }
}
