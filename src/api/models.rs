use serde::{Deserialize, Serialize};

use crate::data_models::BookRecord;

#[derive(Debug, Deserialize)]
pub struct BooksParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub count: usize,
    pub books: Vec<BookRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
