use jobdesk_core::{DebounceTicket, JobDetail, JobId, JobItem, RequestId, SearchQuery, SourceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    JobsFetched {
        query: SearchQuery,
        request_id: RequestId,
        result: Result<Vec<JobItem>, SourceError>,
    },
    DetailFetched {
        id: JobId,
        request_id: RequestId,
        result: Result<JobDetail, SourceError>,
    },
    DebounceSettled {
        ticket: DebounceTicket,
    },
}
