use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One book as returned to API callers.
///
/// Values are copied verbatim from the upstream payload, so every field is an
/// arbitrary JSON value. A field missing upstream is omitted on output; an
/// explicit upstream `null` stays `null`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BookRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Value>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub count: usize,
    pub books: Vec<BookRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SearchResult {
    pub fn from_books(books: Vec<BookRecord>) -> SearchResult {
        SearchResult {
            count: books.len(),
            books,
            message: None,
        }
    }

    pub fn empty(message: impl Into<String>) -> SearchResult {
        SearchResult {
            count: 0,
            books: Vec::new(),
            message: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
