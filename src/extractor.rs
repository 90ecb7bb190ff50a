use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::SearchError;

/// Element id Next.js uses for server-rendered page state.
pub const NEXT_DATA_ID: &str = "__NEXT_DATA__";

static NEXT_DATA_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!("script#{NEXT_DATA_ID}")).expect("static selector is valid")
});

/// Pull the embedded `__NEXT_DATA__` payload out of a page.
///
/// A missing or blank script is `ScriptNotFound`; text that is not JSON is
/// `MalformedPayload`.
pub fn extract_next_data(html: &str) -> Result<Value, SearchError> {
    let raw = script_text(html).ok_or(SearchError::ScriptNotFound)?;
    let payload = serde_json::from_str(&raw)?;
    Ok(payload)
}

// `Html` is !Send, keep it scoped to this function.
fn script_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let text = document
        .select(&NEXT_DATA_SELECTOR)
        .next()
        .map(|script| script.text().collect::<String>())?;

    if text.trim().is_empty() { None } else { Some(text) }
}
