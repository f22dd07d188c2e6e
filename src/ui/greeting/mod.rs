//! Greeting screen state (MVI pattern).
//!
//! ```text
//! Intent ──→ Reducer ──→ DisplayState ──→ View
//! ```
//!
//! The reducer is the only place display-state transitions happen; the
//! view-model runs the fetch effect around it and publishes the result.

mod intent;
mod reducer;
mod state;

pub use intent::GreetingIntent;
pub use reducer::reduce;
pub use state::DisplayState;
