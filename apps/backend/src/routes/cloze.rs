//! Cloze authoring helper endpoint

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use form_core::cloze;

use crate::models::{ClozeParseRequest, ClozeParseResponse};

/// POST /api/cloze/parse
/// Counts the blanks in a sentence and renders it with the given answers
pub async fn parse(Json(request): Json<ClozeParseRequest>) -> Response {
    let structure = cloze::parse(&request.sentence);

    let response = ClozeParseResponse {
        blank_count: structure.blank_count,
        segments: cloze::render(&request.sentence, request.answers.as_slice()),
        preview: cloze::render_plain(&request.sentence, request.answers.as_slice()),
    };

    Json(response).into_response()
}
