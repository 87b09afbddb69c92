use std::time::Duration;

use jobdesk_logging::jobdesk_trace;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Identifies one started timer. Only the most recent ticket can settle.
pub type DebounceTicket = u64;

/// Pure debounce state machine.
///
/// The timer itself lives with whoever executes effects; this type only
/// decides which timer is still live. `notify` supersedes any pending value,
/// `settle` yields the value at most once and only for the current ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(DebounceTicket, T)>,
    last_ticket: DebounceTicket,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_ticket: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record `value` and start a fresh timer, returning its ticket.
    pub fn notify(&mut self, value: T) -> DebounceTicket {
        self.last_ticket += 1;
        if let Some((superseded, _)) = self.pending.replace((self.last_ticket, value)) {
            jobdesk_trace!("debounce ticket {} superseded by {}", superseded, self.last_ticket);
        }
        self.last_ticket
    }

    /// Drop the pending value without emitting. Returns the cancelled ticket.
    pub fn cancel(&mut self) -> Option<DebounceTicket> {
        self.pending.take().map(|(ticket, _)| ticket)
    }

    /// Timer for `ticket` elapsed. Emits the pending value if that timer is
    /// still the live one; stale or repeated tickets yield nothing.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        let live = self.pending.as_ref().map(|(live, _)| *live);
        if live != Some(ticket) {
            return None;
        }
        self.pending.take().map(|(_, value)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}
