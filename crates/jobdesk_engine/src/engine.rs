use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobdesk_core::{DebounceTicket, JobId, RequestId, SearchQuery};
use jobdesk_logging::jobdesk_error;

use crate::debounce::DebounceTimer;
use crate::fetch::{JobSource, ReqwestJobSource, SourceSettings};
use crate::EngineEvent;

enum EngineCommand {
    Fetch(FetchCommand),
    StartDebounce {
        ticket: DebounceTicket,
        delay: Duration,
    },
    CancelDebounce,
}

/// Work that runs on the runtime and answers with one event.
enum FetchCommand {
    Jobs {
        query: SearchQuery,
        request_id: RequestId,
    },
    Detail {
        id: JobId,
        request_id: RequestId,
    },
}

/// Handle to the IO thread. Dropping it stops the thread once queued
/// commands are handed off.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: SourceSettings, events: mpsc::Sender<EngineEvent>) -> Self {
        Self::with_source(Arc::new(ReqwestJobSource::new(settings)), events)
    }

    pub fn with_source(source: Arc<dyn JobSource>, events: mpsc::Sender<EngineEvent>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    jobdesk_error!("failed to start engine runtime: {}", err);
                    return;
                }
            };
            let mut timer = DebounceTimer::new(runtime.handle().clone(), events.clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartDebounce { ticket, delay } => timer.start(ticket, delay),
                    EngineCommand::CancelDebounce => timer.cancel(),
                    EngineCommand::Fetch(fetch) => {
                        let source = source.clone();
                        let events = events.clone();
                        runtime.spawn(async move {
                            handle_fetch(source.as_ref(), fetch, events).await;
                        });
                    }
                }
            }
        });

        Self { cmd_tx }
    }

    pub fn fetch_jobs(&self, query: SearchQuery, request_id: RequestId) {
        self.send(EngineCommand::Fetch(FetchCommand::Jobs { query, request_id }));
    }

    pub fn fetch_detail(&self, id: JobId, request_id: RequestId) {
        self.send(EngineCommand::Fetch(FetchCommand::Detail { id, request_id }));
    }

    pub fn start_debounce(&self, ticket: DebounceTicket, delay: Duration) {
        self.send(EngineCommand::StartDebounce { ticket, delay });
    }

    pub fn cancel_debounce(&self) {
        self.send(EngineCommand::CancelDebounce);
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            jobdesk_error!("engine thread is gone; command dropped");
        }
    }
}

async fn handle_fetch(
    source: &dyn JobSource,
    command: FetchCommand,
    events: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        FetchCommand::Jobs { query, request_id } => {
            let result = source.fetch_jobs(&query).await;
            EngineEvent::JobsFetched {
                query,
                request_id,
                result,
            }
        }
        FetchCommand::Detail { id, request_id } => {
            let result = source.fetch_detail(id).await;
            EngineEvent::DetailFetched {
                id,
                request_id,
                result,
            }
        }
    };
    let _ = events.send(event);
}
