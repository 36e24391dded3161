use once_cell::sync::Lazy;

use crate::{
    constants::quiz_prompt::{FORMAT_INSTRUCTIONS_FOOTER, FORMAT_INSTRUCTIONS_HEADER},
    models::domain::Quiz,
};

static QUIZ_SCHEMA: Lazy<serde_json::Value> = Lazy::new(|| {
    serde_json::to_value(schemars::schema_for!(Quiz)).expect("Quiz schema serializes to JSON")
});

/// JSON schema of [`Quiz`] as a value.
pub fn quiz_schema() -> serde_json::Value {
    QUIZ_SCHEMA.clone()
}

/// Compact JSON schema of [`Quiz`]. Key order is stable across calls.
pub fn quiz_json_schema() -> String {
    QUIZ_SCHEMA.to_string()
}

/// Instructions appended to the prompt describing the expected output shape.
pub fn format_instructions() -> String {
    format!(
        "{}{}{}",
        FORMAT_INSTRUCTIONS_HEADER,
        quiz_json_schema(),
        FORMAT_INSTRUCTIONS_FOOTER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_quiz_fields() {
        let schema = quiz_json_schema();
        for field in ["\"questions\"", "\"answers\"", "\"question\"", "\"A\"", "\"B\"", "\"C\"", "\"D\""] {
            assert!(schema.contains(field), "schema is missing {}", field);
        }
    }

    #[test]
    fn only_question_text_is_required_per_question() {
        let schema = quiz_schema();
        let question_def = schema["$defs"]["ObjectiveQuestion"].clone();
        assert_eq!(question_def["required"], serde_json::json!(["question"]));
    }

    #[test]
    fn top_level_requires_questions_and_answers() {
        let schema = quiz_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"questions"));
        assert!(required.contains(&"answers"));
    }

    #[test]
    fn embedded_schema_is_never_null() {
        assert!(quiz_schema().is_object());
        assert_ne!(quiz_json_schema(), "null");
    }

    #[test]
    fn format_instructions_are_deterministic() {
        let first = format_instructions();
        let second = format_instructions();
        assert_eq!(first, second);
        assert!(first.starts_with("The output should be formatted as a JSON instance"));
        assert!(first.ends_with("```"));
        assert!(first.contains(&quiz_json_schema()));
    }
}
