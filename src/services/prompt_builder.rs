use std::collections::{BTreeSet, HashMap};

use sha2::{Digest, Sha256};

use crate::{
    constants::quiz_prompt::{QUIZ_PROMPT_TEMPLATE, QUIZ_TEMPLATE_VERSION},
    errors::{AppError, AppResult},
    models::dto::request::GenerationRequest,
    services::{prompt_template::PromptTemplate, schema_descriptor},
};

const REQUIRED_PLACEHOLDERS: [&str; 6] = [
    "technical_field",
    "number_of_questions",
    "quiz_type",
    "quiz_content",
    "format_instructions",
    "difficulty_instructions",
];

pub struct QuizPromptBuilder {
    template: PromptTemplate,
    format_instructions: String,
}

impl QuizPromptBuilder {
    pub fn new() -> AppResult<Self> {
        Self::with_template(PromptTemplate::new(QUIZ_TEMPLATE_VERSION, QUIZ_PROMPT_TEMPLATE)?)
    }

    pub fn with_template(template: PromptTemplate) -> AppResult<Self> {
        let expected: BTreeSet<String> =
            REQUIRED_PLACEHOLDERS.iter().map(|s| s.to_string()).collect();

        if template.placeholders() != &expected {
            return Err(AppError::InternalError(format!(
                "Template {} declares placeholders {:?}, expected {:?}",
                template.version(),
                template.placeholders(),
                expected
            )));
        }

        Ok(Self {
            template,
            format_instructions: schema_descriptor::format_instructions(),
        })
    }

    pub fn template_version(&self) -> &str {
        self.template.version()
    }

    pub fn build(&self, request: &GenerationRequest) -> AppResult<String> {
        let difficulty_instructions = request
            .difficulty_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| format!(" The difficulty level of the quiz should be: {}.", d))
            .unwrap_or_default();

        let values = HashMap::from([
            ("technical_field", request.technical_field.clone()),
            ("number_of_questions", request.number_of_questions.to_string()),
            ("quiz_type", request.quiz_type.to_string()),
            ("quiz_content", request.quiz_content.clone()),
            ("format_instructions", self.format_instructions.clone()),
            ("difficulty_instructions", difficulty_instructions),
        ]);

        self.template.format(&values)
    }
}

/// Hex SHA-256 of a prompt.
pub fn prompt_digest(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    format!("{:x}", hasher.finalize())
}
