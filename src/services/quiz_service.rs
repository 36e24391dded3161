use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Quiz, dto::request::GenerationRequest},
    services::{
        completion_client::CompletionClient,
        prompt_builder::{prompt_digest, QuizPromptBuilder},
    },
};

/// Raw completion text plus the prompt metadata it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub raw: String,
    pub template_version: String,
    pub prompt_digest: String,
}

impl GenerationResult {
    /// Parses the completion as arbitrary JSON, the way the form displays it.
    pub fn as_json(&self) -> AppResult<serde_json::Value> {
        Ok(serde_json::from_str(&self.raw)?)
    }

    /// Strict parse into [`Quiz`], also checking one answer per question.
    pub fn parse_quiz(&self) -> AppResult<Quiz> {
        let quiz: Quiz = serde_json::from_str(&self.raw)?;
        if !quiz.answers_match_questions() {
            return Err(AppError::MalformedCompletion(format!(
                "Quiz has {} questions but {} answers",
                quiz.questions.len(),
                quiz.answers.len()
            )));
        }
        Ok(quiz)
    }
}

pub struct QuizService {
    prompt_builder: QuizPromptBuilder,
    completion_client: Arc<dyn CompletionClient>,
}

impl QuizService {
    pub fn new(
        prompt_builder: QuizPromptBuilder,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            prompt_builder,
            completion_client,
        }
    }

    pub fn template_version(&self) -> &str {
        self.prompt_builder.template_version()
    }

    pub fn preview_prompt(&self, request: &GenerationRequest) -> AppResult<String> {
        request.validate()?;
        self.prompt_builder.build(request)
    }

    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResult> {
        let prompt = self.preview_prompt(request)?;
        let digest = prompt_digest(&prompt);

        log::info!(
            "Generating {} {} question(s) with template {} (prompt {})",
            request.number_of_questions,
            request.quiz_type,
            self.template_version(),
            digest
        );

        let raw = self.completion_client.complete(&prompt).await.map_err(|e| {
            log::error!("Completion failed for prompt {}: {}", digest, e);
            e
        })?;

        log::info!("Received {} byte completion for prompt {}", raw.len(), digest);

        Ok(GenerationResult {
            raw,
            template_version: self.template_version().to_string(),
            prompt_digest: digest,
        })
    }
}
