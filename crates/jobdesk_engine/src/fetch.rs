use std::time::Duration;

use futures_util::StreamExt;
use jobdesk_core::{JobDetail, JobId, JobItem, SearchQuery, SourceError};
use jobdesk_logging::{jobdesk_info, jobdesk_warn};
use reqwest::{StatusCode, Url};

use crate::decode::{decode_job_detail, decode_job_list};

pub const DEFAULT_BASE_URL: &str = "https://bytegrad.com/course-assets/projects/rmtdev/api";

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` waits for the remote source indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The remote job listing service.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, query: &SearchQuery) -> Result<Vec<JobItem>, SourceError>;

    async fn fetch_detail(&self, id: JobId) -> Result<JobDetail, SourceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobSource {
    settings: SourceSettings,
}

impl ReqwestJobSource {
    pub fn new(settings: SourceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SourceError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SourceError::Network(err.to_string()))
    }

    /// `{base_url}/data/{segments..}`
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| SourceError::Network(format!("invalid base url: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| SourceError::Network("base url cannot take a path".into()))?
            .pop_if_empty()
            .push("data")
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<(StatusCode, Vec<u8>), SourceError> {
        let client = self.build_client()?;
        jobdesk_info!("GET {}", url);
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Ok((status, Vec::new()));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok((status, bytes))
    }
}

#[async_trait::async_trait]
impl JobSource for ReqwestJobSource {
    async fn fetch_jobs(&self, query: &SearchQuery) -> Result<Vec<JobItem>, SourceError> {
        let mut url = self.endpoint(&[])?;
        url.query_pairs_mut().append_pair("search", query.as_str());

        let (status, body) = self.get(url).await?;
        if !status.is_success() {
            jobdesk_warn!("search {:?} failed with {}", query.as_str(), status);
            return Err(SourceError::HttpStatus(status.as_u16()));
        }
        decode_job_list(&body)
    }

    async fn fetch_detail(&self, id: JobId) -> Result<JobDetail, SourceError> {
        let url = self.endpoint(&[&id.to_string()])?;

        let (status, body) = self.get(url).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id));
        }
        if !status.is_success() {
            jobdesk_warn!("detail {} failed with {}", id, status);
            return Err(SourceError::HttpStatus(status.as_u16()));
        }
        decode_job_detail(&body, id)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> SourceError {
    SourceError::Malformed(format!(
        "response too large (max {max_bytes}, actual {actual})"
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        return SourceError::Timeout;
    }
    SourceError::Network(err.to_string())
}
