//! In-memory render surface.
//!
//! Holds one role per slide and records what the engine asked it to do. Used
//! by the command-line harness and by tests that drive the engine without a
//! real renderer.

use std::fmt::{self, Display};

use slideshow_model::{ItemId, Role, ThumbnailPage};

use crate::surface::SlideSurface;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDeck {
    roles: Vec<Option<Role>>,
    role_writes: Vec<(ItemId, Role)>,
    strip_width: Option<f64>,
    applied_pages: Vec<ThumbnailPage>,
}

impl MemoryDeck {
    /// Deck of `len` slides at rest on `active`: everything before it is
    /// `inactive-left`, everything after it `inactive-right`.
    ///
    /// When `active` is out of range no slide is active.
    pub fn new(len: usize, active: usize) -> Self {
        let roles = (0..len)
            .map(|index| {
                Some(match index.cmp(&active) {
                    std::cmp::Ordering::Less => Role::InactiveLeft,
                    std::cmp::Ordering::Equal => Role::Active,
                    std::cmp::Ordering::Greater => Role::InactiveRight,
                })
            })
            .collect();
        Self {
            roles,
            ..Self::default()
        }
    }

    /// Deck with explicit roles, for states the engine would not produce on
    /// its own.
    pub fn from_roles(roles: Vec<Option<Role>>) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }

    pub fn roles(&self) -> &[Option<Role>] {
        &self.roles
    }

    /// Every `set_role` call received so far, in order.
    pub fn role_writes(&self) -> &[(ItemId, Role)] {
        &self.role_writes
    }

    pub fn clear_role_writes(&mut self) {
        self.role_writes.clear();
    }

    /// Slides currently carrying `role`.
    pub fn items_with(&self, role: Role) -> Vec<ItemId> {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, current)| **current == Some(role))
            .map(|(index, _)| ItemId(index))
            .collect()
    }

    pub fn set_strip_width(&mut self, width: Option<f64>) {
        self.strip_width = width;
    }

    /// Thumbnail layouts applied so far, oldest first.
    pub fn applied_pages(&self) -> &[ThumbnailPage] {
        &self.applied_pages
    }
}

impl SlideSurface for MemoryDeck {
    fn item_count(&self) -> usize {
        self.roles.len()
    }

    fn role_of(&self, item: ItemId) -> Option<Role> {
        self.roles.get(item.index()).copied().flatten()
    }

    fn set_role(&mut self, item: ItemId, role: Role) {
        if let Some(slot) = self.roles.get_mut(item.index()) {
            *slot = Some(role);
            self.role_writes.push((item, role));
        }
    }

    fn thumbnail_strip_width(&self) -> Option<f64> {
        self.strip_width
    }

    fn apply_thumbnail_page(&mut self, page: &ThumbnailPage) {
        self.applied_pages.push(*page);
    }
}

impl Display for MemoryDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, role) in self.roles.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            match role {
                Some(role) => write!(f, "{index}:{}", role.as_str())?,
                None => write!(f, "{index}:-")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Selector;

    #[test]
    fn new_deck_is_at_rest() {
        let deck = MemoryDeck::new(4, 1);
        assert_eq!(
            deck.roles(),
            &[
                Some(Role::InactiveLeft),
                Some(Role::Active),
                Some(Role::InactiveRight),
                Some(Role::InactiveRight),
            ]
        );
        assert_eq!(deck.query_one(Selector::Active), Some(ItemId(1)));
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut deck = MemoryDeck::new(2, 0);
        deck.set_role(ItemId(5), Role::Active);
        assert!(deck.role_writes().is_empty());
        assert_eq!(deck.role_of(ItemId(5)), None);
    }

    #[test]
    fn displays_one_role_per_slide() {
        let deck = MemoryDeck::from_roles(vec![
            Some(Role::OutgoingLeft),
            Some(Role::Incoming),
            None,
        ]);
        assert_eq!(deck.to_string(), "0:outgoing-left 1:incoming 2:-");
    }
}
