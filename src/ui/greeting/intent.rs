//! Intents for the greeting screen.

/// Outcome of a fetch, as seen by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingIntent {
    /// The fetch effect resolved with a message.
    FetchSucceeded(String),

    /// The fetch effect failed; payload is the human-readable description.
    FetchFailed(String),
}
