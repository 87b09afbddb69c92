use std::sync::mpsc;
use std::thread;

use jobdesk_core::{Effect, Msg};
use jobdesk_engine::{EngineEvent, EngineHandle, SourceSettings};
use jobdesk_logging::{jobdesk_debug, jobdesk_info, jobdesk_warn};

/// Executes core effects on the engine and feeds engine events back to the
/// event thread as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new<T>(settings: SourceSettings, inbox: mpsc::Sender<T>) -> Self
    where
        T: From<Msg> + Send + 'static,
    {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::new(settings, event_tx);
        spawn_event_loop(event_rx, inbox);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartDebounce { ticket, delay } => {
                    jobdesk_debug!("StartDebounce ticket={} delay={:?}", ticket, delay);
                    self.engine.start_debounce(ticket, delay);
                }
                Effect::CancelDebounce => self.engine.cancel_debounce(),
                Effect::FetchJobs { query, request_id } => {
                    jobdesk_info!("FetchJobs request_id={} query={:?}", request_id, query.as_str());
                    self.engine.fetch_jobs(query, request_id);
                }
                Effect::FetchDetail { id, request_id } => {
                    jobdesk_info!("FetchDetail request_id={} id={}", request_id, id);
                    self.engine.fetch_detail(id, request_id);
                }
            }
        }
    }
}

fn spawn_event_loop<T>(events: mpsc::Receiver<EngineEvent>, inbox: mpsc::Sender<T>)
where
    T: From<Msg> + Send + 'static,
{
    thread::spawn(move || {
        for event in events {
            if inbox.send(T::from(to_msg(event))).is_err() {
                break;
            }
        }
    });
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::JobsFetched {
            query,
            request_id,
            result,
        } => {
            if let Err(err) = &result {
                jobdesk_warn!("Search {:?} failed: {}", query.as_str(), err);
            }
            Msg::JobsLoaded {
                query,
                request_id,
                result,
            }
        }
        EngineEvent::DetailFetched {
            id,
            request_id,
            result,
        } => {
            if let Err(err) = &result {
                jobdesk_warn!("Detail {} failed: {}", id, err);
            }
            Msg::DetailLoaded {
                id,
                request_id,
                result,
            }
        }
        EngineEvent::DebounceSettled { ticket } => Msg::DebounceElapsed { ticket },
    }
}
