use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::QuizType;

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 5;

/// Parameters collected from the form for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct GenerationRequest {
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub technical_field: String,

    #[validate(length(max = 4000))]
    #[serde(default)]
    pub quiz_content: String,

    #[validate(range(min = 1, max = 5, message = "number_of_questions must be between 1 and 5"))]
    pub number_of_questions: u8,

    pub quiz_type: QuizType,

    #[validate(length(max = 200))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_description: Option<String>,

    /// Parse the completion into a typed quiz instead of passing raw JSON through.
    #[serde(default)]
    pub validate_schema: bool,
}

impl GenerationRequest {
    pub fn new(
        technical_field: impl Into<String>,
        quiz_content: impl Into<String>,
        number_of_questions: u8,
        quiz_type: QuizType,
    ) -> Self {
        Self {
            technical_field: technical_field.into(),
            quiz_content: quiz_content.into(),
            number_of_questions,
            quiz_type,
            difficulty_description: None,
            validate_schema: false,
        }
    }

    pub fn with_difficulty(mut self, description: impl Into<String>) -> Self {
        self.difficulty_description = Some(description.into());
        self
    }

    pub fn with_schema_validation(mut self) -> Self {
        self.validate_schema = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_count(count: u8) -> GenerationRequest {
        GenerationRequest::new("SQL Optimization", "basic joins", count, QuizType::MultiChoice)
    }

    #[test]
    fn question_count_boundaries() {
        assert!(request_with_count(0).validate().is_err());
        assert!(request_with_count(MIN_QUESTIONS).validate().is_ok());
        assert!(request_with_count(MAX_QUESTIONS).validate().is_ok());
        assert!(request_with_count(6).validate().is_err());
    }

    #[test]
    fn empty_text_fields_are_accepted() {
        let request = GenerationRequest::new("", "", 3, QuizType::OpenEnded);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn oversized_difficulty_rejected() {
        let request = request_with_count(2).with_difficulty("x".repeat(201));
        assert!(request.validate().is_err());
    }

    #[test]
    fn deserializes_form_payload_with_defaults() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"technical_field": "Rust", "number_of_questions": 2, "quiz_type": "True-False"}"#,
        )
        .unwrap();

        assert_eq!(request.technical_field, "Rust");
        assert_eq!(request.quiz_content, "");
        assert_eq!(request.quiz_type, QuizType::TrueFalse);
        assert!(request.difficulty_description.is_none());
        assert!(!request.validate_schema);
    }

    #[test]
    fn unknown_quiz_type_is_a_deserialization_error() {
        let result = serde_json::from_str::<GenerationRequest>(
            r#"{"number_of_questions": 2, "quiz_type": "Essay"}"#,
        );
        assert!(result.is_err());
    }
}
