//! Question endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use form_core::validate;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/questions
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Question>>> {
    let rows = state.db.list_questions().await?;
    let questions = rows
        .iter()
        .map(DbQuestion::to_api_question)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = questions.len(), "Listed questions");
    Ok(Json(questions))
}

/// POST /api/questions
/// Validates the payload and stores it
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<QuestionData>,
) -> Result<(StatusCode, Json<Question>)> {
    if let Err(e) = validate(&payload) {
        tracing::warn!(kind = %payload.kind(), error = %e, "Rejected question");
        return Err(e.into());
    }

    let row = state.db.insert_question(&payload).await?;
    let question = row.to_api_question()?;

    tracing::info!(id = %question.id, kind = %question.kind(), "Created question");

    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /api/questions/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Question>> {
    let question = state
        .db
        .get_question(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Question {}", id)))?;

    Ok(Json(question.to_api_question()?))
}

/// DELETE /api/questions/:id
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteQuestionResponse>> {
    if !state.db.delete_question(id).await? {
        return Err(ApiError::NotFound(format!("Question {}", id)));
    }

    tracing::info!(%id, "Deleted question");
    Ok(Json(DeleteQuestionResponse { deleted: true }))
}

/// DELETE /api/questions
pub async fn clear(State(state): State<AppState>) -> Result<Json<ClearQuestionsResponse>> {
    let deleted_count = state.db.delete_all_questions().await?;

    tracing::info!(deleted_count, "Cleared all questions");
    Ok(Json(ClearQuestionsResponse { deleted_count }))
}
