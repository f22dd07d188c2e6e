//! Display state for the greeting screen.

/// What the greeting screen currently shows.
///
/// Exactly one variant holds at any time, so a message and an error can
/// never be on screen together; a new outcome replaces the old one
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Nothing fetched yet.
    #[default]
    Idle,

    /// Last fetch succeeded with this message.
    Loaded(String),

    /// Last fetch failed with this description.
    Failed(String),
}

impl DisplayState {
    /// The success message, if the last fetch succeeded.
    pub fn message(&self) -> Option<&str> {
        match self {
            DisplayState::Loaded(message) => Some(message),
            _ => None,
        }
    }

    /// The error description, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            DisplayState::Failed(description) => Some(description),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DisplayState::Idle)
    }
}
