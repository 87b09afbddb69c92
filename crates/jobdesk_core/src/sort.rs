use std::cmp::Ordering;

use crate::JobItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most relevant first.
    #[default]
    Relevance,
    /// Newest first.
    Recent,
    /// Alphabetical by title, ignoring case.
    Title,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Recent => "recent",
            SortKey::Title => "title",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "relevance" | "relevant" => Some(SortKey::Relevance),
            "recent" | "date" => Some(SortKey::Recent),
            "title" => Some(SortKey::Title),
            _ => None,
        }
    }

    fn compare(self, a: &JobItem, b: &JobItem) -> Ordering {
        match self {
            SortKey::Relevance => b.relevance_score.cmp(&a.relevance_score),
            SortKey::Recent => a.days_ago.cmp(&b.days_ago),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

/// Returns a sorted copy; `items` is left untouched.
///
/// The sort is stable, so equal keys keep their fetch order and repeated
/// sorting is a no-op.
pub fn sort_items(items: &[JobItem], key: SortKey) -> Vec<JobItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
