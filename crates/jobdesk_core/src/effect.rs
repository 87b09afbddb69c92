use std::time::Duration;

use crate::cache::RequestId;
use crate::debounce::DebounceTicket;
use crate::{JobId, SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a timer that answers with `Msg::DebounceElapsed { ticket }`.
    /// Replaces any running timer.
    StartDebounce {
        ticket: DebounceTicket,
        delay: Duration,
    },
    /// Stop the running timer, if any, without it firing.
    CancelDebounce,
    FetchJobs {
        query: SearchQuery,
        request_id: RequestId,
    },
    FetchDetail {
        id: JobId,
        request_id: RequestId,
    },
}
