use thiserror::Error;

pub const MSG_EMPTY_QUERY: &str = "Search query is empty";
pub const MSG_MISSING_PARAM: &str = "Missing or empty search parameter";
pub const MSG_FETCH_FAILED: &str = "Error fetching data";
pub const MSG_NO_BOOKS_DATA: &str = "No books data found on the page";
pub const MSG_NO_BOOKS_FOUND: &str = "No books found";

/// Every way a single book search can stop short of a result.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search parameter is missing")]
    MissingQuery,
    #[error("search query is empty")]
    EmptyQuery,
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("__NEXT_DATA__ script not found")]
    ScriptNotFound,
    #[error("__NEXT_DATA__ script is not valid json: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl SearchError {
    pub fn is_input_error(&self) -> bool {
        matches!(self, SearchError::MissingQuery | SearchError::EmptyQuery)
    }

    /// Message safe to hand back to a caller. Never includes upstream error text.
    pub fn public_message(&self) -> &'static str {
        match self {
            SearchError::MissingQuery => MSG_MISSING_PARAM,
            SearchError::EmptyQuery => MSG_EMPTY_QUERY,
            SearchError::Upstream(_) => MSG_FETCH_FAILED,
            SearchError::ScriptNotFound | SearchError::MalformedPayload(_) => MSG_NO_BOOKS_DATA,
        }
    }
}
