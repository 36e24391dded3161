#[cfg(test)]
pub mod fixtures {
    use crate::models::{domain::QuizType, dto::request::GenerationRequest};

    /// The request used throughout the examples in the form's placeholder text.
    pub fn sql_request() -> GenerationRequest {
        GenerationRequest::new("SQL Optimization", "basic joins", 2, QuizType::TrueFalse)
    }

    /// A well-formed completion for [`sql_request`].
    pub fn sample_quiz_json() -> String {
        serde_json::json!({
            "questions": [
                {
                    "question": "An INNER JOIN returns rows without a match in both tables.",
                    "A": "True",
                    "B": "False"
                },
                {
                    "question": "Indexes on join columns usually speed up joins.",
                    "A": "True",
                    "B": "False"
                }
            ],
            "answers": ["b", "a"]
        })
        .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixture_request_is_valid() {
        let request = sql_request();
        assert!(request.validate().is_ok());
        assert_eq!(request.number_of_questions, 2);
    }

    #[test]
    fn test_fixture_quiz_parses() {
        let quiz: crate::models::domain::Quiz =
            serde_json::from_str(&sample_quiz_json()).unwrap();
        assert!(quiz.answers_match_questions());
    }
}
