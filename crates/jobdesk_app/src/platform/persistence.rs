use std::fs;
use std::path::Path;

use jobdesk_core::{SearchParams, SortKey};
use jobdesk_engine::AtomicFileWriter;
use jobdesk_logging::{jobdesk_error, jobdesk_info, jobdesk_warn};
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = ".jobdesk_state.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    search: String,
    sort: String,
    page: usize,
    active_id: Option<u64>,
}

/// Named parameters of the previous session, if any were saved.
pub(crate) fn load_params(data_dir: &Path) -> Option<SearchParams> {
    let path = data_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            jobdesk_warn!("Failed to read persisted session from {:?}: {}", path, err);
            return None;
        }
    };

    let session: PersistedSession = match ron::from_str(&content) {
        Ok(session) => session,
        Err(err) => {
            jobdesk_warn!("Failed to parse persisted session from {:?}: {}", path, err);
            return None;
        }
    };

    jobdesk_info!("Restored session parameters from {:?}", path);
    Some(SearchParams {
        search: session.search,
        sort: SortKey::parse(&session.sort).unwrap_or_default(),
        page: session.page.max(1),
        active_id: session.active_id,
    })
}

pub(crate) fn save_params(data_dir: &Path, params: &SearchParams) {
    let session = PersistedSession {
        search: params.search.clone(),
        sort: params.sort.as_str().to_string(),
        page: params.page,
        active_id: params.active_id,
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&session, pretty) {
        Ok(text) => text,
        Err(err) => {
            jobdesk_error!("Failed to serialize session: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(data_dir.to_path_buf());
    if let Err(err) = writer.write(STATE_FILENAME, content.as_bytes()) {
        jobdesk_error!("Failed to write session to {:?}: {}", data_dir, err);
    }
}
