use std::fmt::{self, Display};

/// Direction of a single-step slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlideDirection {
    #[default]
    Next,
    Previous,
}

impl SlideDirection {
    /// Side the outgoing item leaves through.
    ///
    /// Moving to the next item pushes the current one out to the left.
    pub fn exit_side(&self) -> Side {
        match self {
            SlideDirection::Next => Side::Left,
            SlideDirection::Previous => Side::Right,
        }
    }

    /// Side of the current item where the neighbor to move to lives.
    pub fn neighbor_side(&self) -> Side {
        match self {
            SlideDirection::Next => Side::Right,
            SlideDirection::Previous => Side::Left,
        }
    }
}

impl Display for SlideDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideDirection::Next => write!(f, "next"),
            SlideDirection::Previous => write!(f, "previous"),
        }
    }
}

/// Direction a swipe gesture travelled across the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwipeDirection {
    Left,
    Right,
}

impl Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Left => write!(f, "left"),
            SwipeDirection::Right => write!(f, "right"),
        }
    }
}

/// Horizontal side relative to an item in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_exits_left_and_looks_right() {
        assert_eq!(SlideDirection::Next.exit_side(), Side::Left);
        assert_eq!(SlideDirection::Next.neighbor_side(), Side::Right);
        assert_eq!(SlideDirection::Previous.exit_side(), Side::Right);
        assert_eq!(SlideDirection::Previous.neighbor_side(), Side::Left);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }
}
