use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use std::sync::Arc;

use crate::error::MSG_MISSING_PARAM;
use crate::query::SearchQuery;

use super::AppState;
use super::models::{BooksParams, BooksResponse, ErrorResponse, HealthResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn books_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<BooksParams>, QueryRejection>,
) -> Result<Json<BooksResponse>, ApiError> {
    let search = match params {
        Ok(Query(params)) => params.search,
        Err(e) => {
            log::warn!("rejected query string: {e}");
            None
        }
    };

    let query = SearchQuery::parse(search.as_deref()).map_err(|_| {
        log::info!("missing or empty search parameter");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: MSG_MISSING_PARAM.to_string(),
                count: None,
                attribution: state.attribution.clone(),
            }),
        )
    })?;

    log::info!("api request received with search query: {query}");
    let result = state.search.search(query.as_str()).await;

    if result.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: result.message.unwrap_or_default(),
                count: Some(0),
                attribution: state.attribution.clone(),
            }),
        ));
    }

    Ok(Json(BooksResponse {
        count: result.count,
        books: result.books,
    }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
