use std::fmt::{self, Display};
use std::str::FromStr;

/// Logical position of the active item as tracked by unit steps.
///
/// Signed because a drifted counter can be decremented past zero; the engine
/// never treats it as an index without going back to the render tree.
pub type Offset = i64;

/// Lifecycle of the widget with respect to slide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LoadingState {
    /// Initial value, before the first store notification.
    #[default]
    Loading,
    /// No transition in flight.
    Ready,
    /// A transition has started and its completion signal is pending.
    Sliding,
}

impl LoadingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingState::Loading => "LOADING",
            LoadingState::Ready => "READY",
            LoadingState::Sliding => "SLIDING",
        }
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self, LoadingState::Sliding)
    }
}

impl Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions understood by the slideshow store.
///
/// Both reducers see every action; each one ignores the actions that belong
/// to the other slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Action {
    Loading,
    Sliding,
    Ready,
    Increment,
    Decrement,
    Reset,
}

impl Action {
    pub const ALL: [Self; 6] = [
        Self::Loading,
        Self::Sliding,
        Self::Ready,
        Self::Increment,
        Self::Decrement,
        Self::Reset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Loading => "LOADING",
            Action::Sliding => "SLIDING",
            Action::Ready => "READY",
            Action::Increment => "INCREMENT",
            Action::Decrement => "DECREMENT",
            Action::Reset => "RESET",
        }
    }

    /// The loading state this action sets, if it is a loading action.
    pub fn loading_target(&self) -> Option<LoadingState> {
        match self {
            Action::Loading => Some(LoadingState::Loading),
            Action::Sliding => Some(LoadingState::Sliding),
            Action::Ready => Some(LoadingState::Ready),
            _ => None,
        }
    }

    pub fn is_offset_action(&self) -> bool {
        matches!(self, Action::Increment | Action::Decrement | Action::Reset)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LoadingState> for Action {
    fn from(state: LoadingState) -> Self {
        match state {
            LoadingState::Loading => Action::Loading,
            LoadingState::Ready => Action::Ready,
            LoadingState::Sliding => Action::Sliding,
        }
    }
}

/// Returned when parsing an action name that the store does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action type '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_actions_map_to_their_state() {
        assert_eq!(Action::Sliding.loading_target(), Some(LoadingState::Sliding));
        assert_eq!(Action::Ready.loading_target(), Some(LoadingState::Ready));
        assert_eq!(Action::Increment.loading_target(), None);
        assert!(Action::Reset.is_offset_action());
        assert!(!Action::Loading.is_offset_action());
    }

    #[test]
    fn action_names_parse_back() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
        assert!("JUMP".parse::<Action>().is_err());
    }

    #[test]
    fn initial_loading_state_is_loading() {
        assert_eq!(LoadingState::default(), LoadingState::Loading);
        assert!(!LoadingState::Ready.is_sliding());
    }
}
