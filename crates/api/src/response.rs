//! Shared response envelope types for API handlers.
//!
//! Successful API responses use a `{ "data": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// One page of questions plus paging metadata, shared by the question
/// listing and search endpoints.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse<T: Serialize> {
    pub questions: Vec<T>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_questions: i64,
}
