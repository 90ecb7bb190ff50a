use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::Config;
use crate::error::SearchError;
use crate::query::SearchQuery;

const SEARCH_PATH: &str = "/uz/search";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Characters left unescaped by URI component encoding.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Issues the single outbound request of a search.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    endpoint: Url,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Fetcher> {
        let base = Url::parse(&config.upstream_base_url)
            .with_context(|| format!("Invalid upstream base url: {}", config.upstream_base_url))?;
        let endpoint = base
            .join(SEARCH_PATH)
            .context("Failed to build upstream search endpoint")?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(5))
            .timeout(config.fetch_timeout)
            .build()
            .context("Failed to build http client")?;

        Ok(Fetcher { client, endpoint })
    }

    pub fn search_url(&self, query: &SearchQuery) -> Url {
        let encoded = utf8_percent_encode(query.as_str(), URI_COMPONENT);
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!("search={encoded}&audios=1&books=1")));
        url
    }

    /// Fetch the upstream search page. Any transport failure, timeout or
    /// non-2xx status is an error; nothing is retried.
    pub async fn fetch(&self, query: &SearchQuery) -> Result<String, SearchError> {
        let url = self.search_url(query);
        log::info!("fetching data for query: {query}, url: {url}");

        let res = self.client.get(url).send().await?.error_for_status()?;
        let body = res.text().await?;

        log::info!("received response from the site ({} bytes)", body.len());
        Ok(body)
    }
}
