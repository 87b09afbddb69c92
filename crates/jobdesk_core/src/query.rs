use std::fmt;

/// Normalized search text, used as the cache key.
///
/// The empty query is valid and means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim surrounding whitespace and lower-case the text.
///
/// Total and deterministic: inputs differing only by case or leading/trailing
/// whitespace share one key.
pub fn normalize_query(raw: &str) -> SearchQuery {
    SearchQuery(raw.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_surrounding_whitespace_collapse() {
        assert_eq!(normalize_query("  Engineer\t"), normalize_query("eNGINEER"));
        assert_eq!(normalize_query(" Rust Dev ").as_str(), "rust dev");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_ne!(normalize_query("rust dev"), normalize_query("rustdev"));
    }

    #[test]
    fn blank_input_is_the_empty_query() {
        assert!(normalize_query("   \n").is_empty());
        assert_eq!(normalize_query(""), SearchQuery::default());
    }
}
