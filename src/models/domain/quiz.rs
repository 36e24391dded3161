use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::ObjectiveQuestion;

/// Output shape the model is asked to produce.
///
/// `answers` is positional: `answers[i]` answers `questions[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Quiz {
    pub questions: Vec<ObjectiveQuestion>,
    pub answers: Vec<String>,
}

impl Quiz {
    pub fn answers_match_questions(&self) -> bool {
        self.answers.len() == self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_model_output_with_partial_choices() {
        let raw = r#"{
            "questions": [
                {"question": "What command creates a table?", "A": "CREATE TABLE", "B": "BUILD TABLE"},
                {"question": "What is a primary key?"}
            ],
            "answers": ["A", "A unique row identifier"]
        }"#;

        let quiz: Quiz = serde_json::from_str(raw).unwrap();

        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].a.as_deref(), Some("CREATE TABLE"));
        assert!(quiz.questions[0].c.is_none());
        assert!(quiz.questions[1].a.is_none());
        assert!(quiz.answers_match_questions());
    }

    #[test]
    fn detects_answer_count_mismatch() {
        let quiz = Quiz {
            questions: vec![ObjectiveQuestion::open("Q1"), ObjectiveQuestion::open("Q2")],
            answers: vec!["only one".to_string()],
        };
        assert!(!quiz.answers_match_questions());
    }
}
