use crate::error::CoreError;
use regex::Regex;

/// Case-insensitive query over a record's searchable text.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pattern: Regex,
}

impl SearchQuery {
    /// Compiles the lowercased query as a regex; invalid patterns match literally.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let query = raw.trim().to_lowercase();
        if query.is_empty() {
            return Err(CoreError::EmptySearchQuery);
        }

        let pattern = match Regex::new(&query) {
            Ok(pattern) => pattern,
            Err(_) => Regex::new(&regex::escape(&query))
                .map_err(|err| CoreError::InvalidSearchQuery(err.to_string()))?,
        };
        Ok(Self { pattern })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(&text.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;
    use crate::error::CoreError;

    #[test]
    fn parse_rejects_blank_query() {
        assert_eq!(
            SearchQuery::parse("  ").unwrap_err(),
            CoreError::EmptySearchQuery
        );
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let query = SearchQuery::parse("LOVE").unwrap();
        assert!(query.matches("Ada Lovelace, 111"));
        assert!(!query.matches("Bob, 222"));
    }

    #[test]
    fn matches_regex() {
        let query = SearchQuery::parse(r"^ada.*\d{3}$").unwrap();
        assert!(query.matches("Ada, 111"));
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        let query = SearchQuery::parse("(415").unwrap();
        assert!(query.matches("note (415) 555"));
        assert!(!query.matches("415"));
    }
}
