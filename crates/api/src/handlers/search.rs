//! Handler for `GET /search`.

use askhub_core::pagination::{total_pages, Page};
use askhub_core::search::{normalize_query, SearchType};
use askhub_db::repositories::QuestionRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::response::{DataResponse, QuestionListResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type", default)]
    pub search_type: String,
    pub page: Option<i64>,
}

/// GET /api/v1/search?q=&type=&page=
///
/// Case-insensitive substring search, most recently updated first.
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let query = normalize_query(&params.q)?;
    let search_type: SearchType = params.search_type.parse()?;
    let page = Page::new(params.page);

    let result = QuestionRepo::search(&state.pool, &query, search_type, page).await?;
    tracing::debug!(query = %query, ?search_type, total = result.total, "Search executed");

    Ok(Json(DataResponse {
        data: QuestionListResponse {
            total_pages: total_pages(result.total, page.per_page),
            current_page: page.number,
            total_questions: result.total,
            questions: result.questions,
        },
    }))
}
