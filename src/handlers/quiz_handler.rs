use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    constants::form_page::FORM_PAGE_HTML,
    errors::AppError,
    models::dto::{
        request::GenerationRequest,
        response::{GenerateQuizResponse, PromptPreviewResponse, QuizSchemaResponse},
    },
    services::{prompt_builder::prompt_digest, schema_descriptor},
};

#[get("/")]
async fn quiz_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(FORM_PAGE_HTML)
}

#[post("/api/quiz/generate")]
async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let result = state.quiz_service.generate(&request).await?;

    let quiz = if request.validate_schema {
        serde_json::to_value(result.parse_quiz()?)?
    } else {
        result.as_json()?
    };

    Ok(HttpResponse::Ok().json(GenerateQuizResponse {
        quiz,
        quiz_type: request.quiz_type,
        number_of_questions: request.number_of_questions,
        template_version: result.template_version,
        prompt_digest: result.prompt_digest,
        generated_at: Utc::now(),
    }))
}

#[post("/api/quiz/prompt")]
async fn preview_prompt(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = state.quiz_service.preview_prompt(&request)?;
    let digest = prompt_digest(&prompt);

    Ok(HttpResponse::Ok().json(PromptPreviewResponse {
        prompt,
        template_version: state.quiz_service.template_version().to_string(),
        prompt_digest: digest,
    }))
}

#[get("/api/quiz/schema")]
async fn quiz_schema() -> HttpResponse {
    HttpResponse::Ok().json(QuizSchemaResponse {
        schema: schema_descriptor::quiz_schema(),
        format_instructions: schema_descriptor::format_instructions(),
    })
}
