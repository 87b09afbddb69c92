pub type JobId = u64;

/// A job posting as listed in search results.
///
/// Items are immutable once received; every field is required so a partial
/// remote payload never makes it past the fetch boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobItem {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub badge_letters: String,
    /// Higher is more relevant.
    pub relevance_score: u32,
    /// Age of the posting; lower is more recent.
    pub days_ago: u32,
}

/// Extended content for a single posting, fetched lazily on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub item: JobItem,
    pub description: String,
    pub qualifications: Vec<String>,
    pub reviews: Vec<String>,
    pub duration: String,
    pub salary: String,
    pub location: String,
    pub cover_img_url: String,
    pub company_url: String,
}
