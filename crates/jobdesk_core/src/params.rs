use url::form_urlencoded;

use crate::{JobId, SortKey};

/// The named parameters a shareable location carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub search: String,
    pub sort: SortKey,
    pub page: usize,
    pub active_id: Option<JobId>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
            active_id: None,
        }
    }
}

impl SearchParams {
    /// `search=..&sort=..&page=..[&id=..]`, form-urlencoded.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("search", &self.search)
            .append_pair("sort", self.sort.as_str())
            .append_pair("page", &self.page.to_string());
        if let Some(id) = self.active_id {
            serializer.append_pair("id", &id.to_string());
        }
        serializer.finish()
    }

    /// Total parse: unknown keys are ignored and unparsable values keep their
    /// defaults. A leading `?` is accepted.
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => params.search = value.into_owned(),
                "sort" => {
                    if let Some(sort) = SortKey::parse(&value) {
                        params.sort = sort;
                    }
                }
                "page" => {
                    if let Ok(page) = value.parse::<usize>() {
                        params.page = page.max(1);
                    }
                }
                "id" => params.active_id = value.parse().ok(),
                _ => {}
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_and_optional_id() {
        let params = SearchParams {
            search: "rust dev".into(),
            sort: SortKey::Recent,
            page: 2,
            active_id: Some(42),
        };
        assert_eq!(
            params.to_query_string(),
            "search=rust+dev&sort=recent&page=2&id=42"
        );
        assert_eq!(
            SearchParams::default().to_query_string(),
            "search=&sort=relevance&page=1"
        );
    }

    #[test]
    fn parse_tolerates_garbage() {
        let params = SearchParams::parse("?search=web%20dev&sort=bogus&page=0&id=x&utm=1");
        assert_eq!(params.search, "web dev");
        assert_eq!(params.sort, SortKey::Relevance);
        assert_eq!(params.page, 1);
        assert_eq!(params.active_id, None);
    }

    #[test]
    fn parse_reads_back_serialized_params() {
        let params = SearchParams {
            search: "c++ & go".into(),
            sort: SortKey::Title,
            page: 4,
            active_id: Some(7),
        };
        assert_eq!(SearchParams::parse(&params.to_query_string()), params);
    }
}
