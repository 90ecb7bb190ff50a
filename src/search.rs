use anyhow::Result;

use crate::config::Config;
use crate::data_models::SearchResult;
use crate::error::{MSG_NO_BOOKS_FOUND, SearchError};
use crate::extractor::extract_next_data;
use crate::fetcher::Fetcher;
use crate::projector::project;
use crate::query::SearchQuery;

/// The fetch → extract → project pipeline behind `/api/books`.
///
/// Holds no per-request state; one instance serves every request.
#[derive(Debug, Clone)]
pub struct BookSearch {
    fetcher: Fetcher,
}

impl BookSearch {
    pub fn new(config: &Config) -> Result<BookSearch> {
        Ok(BookSearch {
            fetcher: Fetcher::new(config)?,
        })
    }

    /// Run a search for a raw caller string, folding every failure into an
    /// empty result that carries a caller-safe message.
    pub async fn search(&self, raw: &str) -> SearchResult {
        let outcome = match SearchQuery::parse(Some(raw)) {
            Ok(query) => self.run(&query).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => result,
            Err(e) => {
                match &e {
                    SearchError::MissingQuery | SearchError::EmptyQuery => {
                        log::info!("empty search query provided")
                    }
                    SearchError::Upstream(_) => {
                        log::error!("error fetching the page, error: {:#}", e)
                    }
                    SearchError::ScriptNotFound => log::warn!("__NEXT_DATA__ script not found"),
                    SearchError::MalformedPayload(_) => {
                        log::warn!("unparseable __NEXT_DATA__ payload, error: {:#}", e)
                    }
                }
                SearchResult::empty(e.public_message())
            }
        }
    }

    pub async fn run(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let html = self.fetcher.fetch(query).await?;
        let payload = extract_next_data(&html)?;
        let mut result = project(&payload);
        if result.is_empty() {
            result.message = Some(MSG_NO_BOOKS_FOUND.to_string());
        }
        log::info!("query {query} produced {} books", result.count);
        Ok(result)
    }
}
