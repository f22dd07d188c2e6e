//! Shared test doubles for the fetch seam.

#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use stratum::domain::DomainError;
use stratum::net::NetError;
use stratum::ui::view_model::DataFetcher;

/// Fetcher that always succeeds with a fixed message.
pub struct StaticFetcher(pub &'static str);

#[async_trait]
impl DataFetcher for StaticFetcher {
    async fn fetch_data(&self) -> Result<String, DomainError> {
        Ok(self.0.to_string())
    }
}

/// Fetcher that always fails with a transport error.
pub struct FailingFetcher(pub &'static str);

impl FailingFetcher {
    /// The description the view-model is expected to project.
    pub fn description(&self) -> String {
        DomainError::Transport(NetError::Io(self.0.to_string())).to_string()
    }
}

#[async_trait]
impl DataFetcher for FailingFetcher {
    async fn fetch_data(&self) -> Result<String, DomainError> {
        Err(DomainError::Transport(NetError::Io(self.0.to_string())))
    }
}

/// One pre-programmed fetch invocation.
pub struct ScriptedCall {
    /// Signalled as soon as the call starts.
    pub started: Option<oneshot::Sender<()>>,
    /// Held open until the test releases it.
    pub gate: Option<oneshot::Receiver<()>>,
    pub result: Result<String, DomainError>,
}

impl ScriptedCall {
    pub fn immediate(message: &str) -> Self {
        Self {
            started: None,
            gate: None,
            result: Ok(message.to_string()),
        }
    }

    pub fn gated(message: &str) -> (Self, oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (started_tx, started_rx) = oneshot::channel();
        let (gate_tx, gate_rx) = oneshot::channel();
        let call = Self {
            started: Some(started_tx),
            gate: Some(gate_rx),
            result: Ok(message.to_string()),
        };
        (call, started_rx, gate_tx)
    }
}

/// Fetcher that replays a fixed sequence of calls, each optionally gated
/// so tests can control completion order.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<ScriptedCall>>,
}

impl ScriptedFetcher {
    pub fn new(calls: impl IntoIterator<Item = ScriptedCall>) -> Self {
        Self {
            script: Mutex::new(calls.into_iter().collect()),
        }
    }
}

#[async_trait]
impl DataFetcher for ScriptedFetcher {
    async fn fetch_data(&self) -> Result<String, DomainError> {
        // Pop before awaiting the gate so overlapping calls each get
        // their own entry.
        let call = {
            let mut script = self.script.lock().await;
            script.pop_front().expect("fetch called past end of script")
        };

        if let Some(started) = call.started {
            let _ = started.send(());
        }
        if let Some(gate) = call.gate {
            let _ = gate.await;
        }
        call.result
    }
}
