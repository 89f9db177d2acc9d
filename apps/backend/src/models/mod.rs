//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{ApiError, Result};

// Re-export shared types from form-core
pub use form_core::cloze::Segment;
pub use form_core::types::{Question, QuestionData, QuestionKind};

// === Database Entity Types ===

/// Question stored in PostgreSQL. `data` holds the variant body only; the
/// variant name lives in `question_type`.
#[derive(Debug, Clone, FromRow)]
pub struct DbQuestion {
    pub id: Uuid,
    pub question_type: String,
    pub data: Json<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbQuestion {
    pub fn kind(&self) -> Option<QuestionKind> {
        QuestionKind::from_str(&self.question_type)
    }

    /// Convert to API question type
    pub fn to_api_question(&self) -> Result<Question> {
        let kind = self.kind().ok_or_else(|| {
            ApiError::Internal(format!(
                "Question {} has unknown type {}",
                self.id, self.question_type
            ))
        })?;

        let data = serde_json::from_value(serde_json::json!({
            "type": kind.as_str(),
            "data": self.data.0,
        }))?;

        Ok(Question {
            id: self.id,
            data,
            created_at: self.created_at,
        })
    }
}

/// Split a payload into its variant name and body for storage.
pub fn split_payload(data: &QuestionData) -> Result<(QuestionKind, Value)> {
    let body = match data {
        QuestionData::Categorize(d) => serde_json::to_value(d)?,
        QuestionData::Cloze(d) => serde_json::to_value(d)?,
        QuestionData::Comprehension(d) => serde_json::to_value(d)?,
    };
    Ok((data.kind(), body))
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteQuestionResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearQuestionsResponse {
    pub deleted_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClozeParseRequest {
    pub sentence: String,
    #[serde(default)]
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClozeParseResponse<'a> {
    pub blank_count: usize,
    pub segments: Vec<Segment<'a>>,
    pub preview: String,
}
