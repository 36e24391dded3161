use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        completion_client::{CompletionClient, OpenAiCompletionClient},
        prompt_builder::QuizPromptBuilder,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let completion_client = Arc::new(OpenAiCompletionClient::new(&config));
        log::info!("Using completion model {}", completion_client.model());
        Self::with_client(config, completion_client)
    }

    pub fn with_client(
        config: Config,
        completion_client: Arc<dyn CompletionClient>,
    ) -> AppResult<Self> {
        let prompt_builder = QuizPromptBuilder::new()?;
        let quiz_service = Arc::new(QuizService::new(prompt_builder, completion_client));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
        })
    }
}
