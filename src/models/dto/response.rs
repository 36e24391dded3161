use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::QuizType;

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub quiz: serde_json::Value,
    pub quiz_type: QuizType,
    pub number_of_questions: u8,
    pub template_version: String,
    pub prompt_digest: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PromptPreviewResponse {
    pub prompt: String,
    pub template_version: String,
    pub prompt_digest: String,
}

#[derive(Debug, Serialize)]
pub struct QuizSchemaResponse {
    pub schema: serde_json::Value,
    pub format_instructions: String,
}
