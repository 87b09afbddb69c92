use std::sync::mpsc;
use std::time::Duration;

use jobdesk_core::DebounceTicket;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::EngineEvent;

/// Cancellable one-shot timer backing the core debouncer.
///
/// At most one timer runs; starting a new one cancels the previous. A
/// cancelled timer never emits.
pub struct DebounceTimer {
    runtime: Handle,
    events: mpsc::Sender<EngineEvent>,
    running: Option<CancellationToken>,
}

impl DebounceTimer {
    pub fn new(runtime: Handle, events: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            events,
            running: None,
        }
    }

    pub fn start(&mut self, ticket: DebounceTicket, delay: Duration) {
        self.cancel();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let events = self.events.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = events.send(EngineEvent::DebounceSettled { ticket });
                }
            }
        });
        self.running = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.running.take() {
            token.cancel();
        }
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
