use crate::error::SearchError;

/// A search term that has passed the emptiness check.
///
/// Holds the caller's string exactly as given. Trimming is only used to decide
/// whether the term is blank; the untrimmed text is what goes upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: Option<&str>) -> Result<SearchQuery, SearchError> {
        let raw = raw.ok_or(SearchError::MissingQuery)?;
        if raw.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(SearchQuery(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_is_rejected() {
        assert!(matches!(
            SearchQuery::parse(None),
            Err(SearchError::MissingQuery)
        ));
    }

    #[test]
    fn test_blank_queries_are_rejected() {
        for raw in ["", " ", "   ", "\t\n", "\u{3000}"] {
            assert!(
                matches!(SearchQuery::parse(Some(raw)), Err(SearchError::EmptyQuery)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_preserved() {
        let query = SearchQuery::parse(Some("  alisher navoiy ")).unwrap();
        assert_eq!(query.as_str(), "  alisher navoiy ");
    }
}
