use std::fmt::{self, Display};

use crate::direction::Side;

/// Identity of a slide: its position in the ordered deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub usize);

impl ItemId {
    pub fn index(&self) -> usize {
        self.0
    }

    /// Neighbor on `side`, if the deck has one there.
    pub fn neighbor(&self, side: Side, len: usize) -> Option<ItemId> {
        match side {
            Side::Left => self.0.checked_sub(1).map(ItemId),
            Side::Right => {
                let next = self.0.checked_add(1)?;
                (next < len).then_some(ItemId(next))
            }
        }
    }
}

impl From<usize> for ItemId {
    fn from(index: usize) -> Self {
        ItemId(index)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual-position tag of a slide.
///
/// `Incoming` is the active item of a transition that has not completed yet;
/// it counts as active everywhere the deck is asked for "the active item".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Role {
    InactiveLeft,
    InactiveRight,
    Active,
    Incoming,
    OutgoingLeft,
    OutgoingRight,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::InactiveLeft => "inactive-left",
            Role::InactiveRight => "inactive-right",
            Role::Active => "active",
            Role::Incoming => "incoming",
            Role::OutgoingLeft => "outgoing-left",
            Role::OutgoingRight => "outgoing-right",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Role::Active | Role::Incoming)
    }

    /// Roles that only exist while a transition is in flight.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Role::Incoming | Role::OutgoingLeft | Role::OutgoingRight
        )
    }

    pub fn inactive(side: Side) -> Role {
        match side {
            Side::Left => Role::InactiveLeft,
            Side::Right => Role::InactiveRight,
        }
    }

    pub fn outgoing(side: Side) -> Role {
        match side {
            Side::Left => Role::OutgoingLeft,
            Side::Right => Role::OutgoingRight,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
