//! Reducer for the greeting screen.

use super::intent::GreetingIntent;
use super::state::DisplayState;

/// Process a fetch outcome and return the new display state.
///
/// Pure function, no side effects. Either intent replaces the entire state,
/// so a failure clears a previous success and vice versa.
pub fn reduce(_state: DisplayState, intent: GreetingIntent) -> DisplayState {
    match intent {
        GreetingIntent::FetchSucceeded(message) => DisplayState::Loaded(message),
        GreetingIntent::FetchFailed(description) => DisplayState::Failed(description),
    }
}
