//! View-model for the greeting screen.
//!
//! Bridges the one asynchronous effect (the data fetch) to a synchronously
//! observable [`DisplayState`], published through a `watch` channel so the
//! rendering layer can subscribe without knowing anything about the effect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::{DomainError, GreetingService};
use crate::ui::greeting::{reduce, DisplayState, GreetingIntent};

/// The one effect the greeting screen needs from the outside world.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    async fn fetch_data(&self) -> Result<String, DomainError>;
}

#[async_trait]
impl DataFetcher for GreetingService {
    async fn fetch_data(&self) -> Result<String, DomainError> {
        self.get_data().await
    }
}

/// Dependency bundle for [`GreetingViewModel`].
///
/// Immutable after construction. The production bundle wraps the domain
/// service; tests and previews substitute their own [`DataFetcher`]
/// wholesale without touching the view-model's code path.
pub struct Dependencies {
    fetch: Arc<dyn DataFetcher>,
}

impl Dependencies {
    pub fn new(fetch: Arc<dyn DataFetcher>) -> Self {
        Self { fetch }
    }

    /// The bundle used by the composition root.
    pub fn production(service: GreetingService) -> Self {
        Self::new(Arc::new(service))
    }
}

/// Owns the current [`DisplayState`] and the dependency bundle.
pub struct GreetingViewModel {
    dependencies: Dependencies,
    state_tx: watch::Sender<DisplayState>,
    /// Generation of the most recently started fetch. A completion only
    /// publishes if its generation is still current, so overlapping
    /// triggers resolve last-trigger-wins.
    generation: AtomicU64,
}

impl GreetingViewModel {
    /// No side effects, no I/O; the initial state is `Idle`.
    pub fn new(dependencies: Dependencies) -> Self {
        let (state_tx, _) = watch::channel(DisplayState::Idle);
        Self {
            dependencies,
            state_tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Subscribe to display-state changes.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current display state.
    pub fn state(&self) -> DisplayState {
        self.state_tx.borrow().clone()
    }

    /// Run the fetch effect and project its outcome into the display state.
    ///
    /// Never returns an error to its caller: a failed fetch is observable
    /// only as a `Failed` state. A completion belonging to a superseded
    /// trigger is discarded without publishing.
    pub async fn trigger_fetch(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let intent = match self.dependencies.fetch.fetch_data().await {
            Ok(message) => GreetingIntent::FetchSucceeded(message),
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed");
                GreetingIntent::FetchFailed(err.to_string())
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "discarding superseded fetch result");
            return;
        }

        self.state_tx.send_modify(|state| {
            *state = reduce(std::mem::take(state), intent);
        });
    }
}
