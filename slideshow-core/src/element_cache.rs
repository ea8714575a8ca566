//! Memoized selector lookups against the render surface.
//!
//! A cache lives exactly as long as the structure it was filled from. There is
//! no invalidation: whoever changes the deck structure replaces the cache.

use std::collections::HashMap;

use slideshow_model::ItemId;
use tracing::trace;

use crate::surface::{Selector, SlideSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    One(Option<ItemId>),
    Many(Vec<ItemId>),
}

impl Resolved {
    pub fn first(&self) -> Option<ItemId> {
        match self {
            Resolved::One(item) => *item,
            Resolved::Many(items) => items.first().copied(),
        }
    }

    pub fn into_items(self) -> Vec<ItemId> {
        match self {
            Resolved::One(item) => item.into_iter().collect(),
            Resolved::Many(items) => items,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ElementCache {
    entries: HashMap<Selector, Resolved>,
}

impl ElementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached lookup of `selector`.
    ///
    /// On a hit the stored value is returned as-is, whatever `multiple` says;
    /// the flag only shapes the first lookup.
    pub fn resolve<S>(
        &mut self,
        surface: &S,
        selector: Selector,
        multiple: bool,
    ) -> Resolved
    where
        S: SlideSurface + ?Sized,
    {
        self.entries
            .entry(selector)
            .or_insert_with(|| {
                trace!(?selector, multiple, "resolving selector");
                if multiple {
                    Resolved::Many(surface.query(selector))
                } else {
                    Resolved::One(surface.query_one(selector))
                }
            })
            .clone()
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.entries.contains_key(selector)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MockSlideSurface;
    use mockall::predicate::eq;

    #[test]
    fn second_resolve_hits_the_cache() {
        let mut surface = MockSlideSurface::new();
        surface
            .expect_query()
            .with(eq(Selector::Items))
            .times(1)
            .returning(|_| vec![ItemId(0), ItemId(1), ItemId(2)]);

        let mut cache = ElementCache::new();
        let first = cache.resolve(&surface, Selector::Items, true);
        let second = cache.resolve(&surface, Selector::Items, true);

        assert_eq!(first, second);
        assert_eq!(first.into_items().len(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn single_lookup_uses_query_one() {
        let mut surface = MockSlideSurface::new();
        surface
            .expect_query_one()
            .with(eq(Selector::Active))
            .times(1)
            .returning(|_| Some(ItemId(2)));

        let mut cache = ElementCache::new();
        assert_eq!(
            cache.resolve(&surface, Selector::Active, false),
            Resolved::One(Some(ItemId(2)))
        );
        // A hit ignores the flag and returns the stored shape.
        assert_eq!(
            cache.resolve(&surface, Selector::Active, true).first(),
            Some(ItemId(2))
        );
        assert!(cache.contains(&Selector::Active));
    }
}
