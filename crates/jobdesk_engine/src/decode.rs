use jobdesk_core::{JobDetail, JobId, JobItem, SourceError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireJobItem {
    id: JobId,
    badge_letters: String,
    title: String,
    company: String,
    relevance_score: u32,
    days_ago: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireJobList {
    job_items: Vec<WireJobItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireJobDetail {
    #[serde(flatten)]
    item: WireJobItem,
    description: String,
    qualifications: Vec<String>,
    reviews: Vec<String>,
    duration: String,
    salary: String,
    location: String,
    #[serde(rename = "coverImgURL")]
    cover_img_url: String,
    #[serde(rename = "companyURL")]
    company_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDetailResponse {
    job_item: WireJobDetail,
}

impl From<WireJobItem> for JobItem {
    fn from(wire: WireJobItem) -> Self {
        JobItem {
            id: wire.id,
            title: wire.title,
            company: wire.company,
            badge_letters: wire.badge_letters,
            relevance_score: wire.relevance_score,
            days_ago: wire.days_ago,
        }
    }
}

/// Decode a search response. Any missing or ill-typed field rejects the
/// whole payload.
pub fn decode_job_list(bytes: &[u8]) -> Result<Vec<JobItem>, SourceError> {
    let list: WireJobList =
        serde_json::from_slice(bytes).map_err(|err| SourceError::Malformed(err.to_string()))?;
    Ok(list.job_items.into_iter().map(JobItem::from).collect())
}

/// Decode a detail response, checking it describes the requested job.
pub fn decode_job_detail(bytes: &[u8], expected: JobId) -> Result<JobDetail, SourceError> {
    let response: WireDetailResponse =
        serde_json::from_slice(bytes).map_err(|err| SourceError::Malformed(err.to_string()))?;
    let wire = response.job_item;
    if wire.item.id != expected {
        return Err(SourceError::Malformed(format!(
            "asked for job {expected}, got job {}",
            wire.item.id
        )));
    }
    Ok(JobDetail {
        item: wire.item.into(),
        description: wire.description,
        qualifications: wire.qualifications,
        reviews: wire.reviews,
        duration: wire.duration,
        salary: wire.salary,
        location: wire.location,
        cover_img_url: wire.cover_img_url,
        company_url: wire.company_url,
    })
}
