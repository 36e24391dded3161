pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz, preview_prompt, quiz_form, quiz_schema};

use crate::errors::AppError;

/// Maps body deserialization failures (bad quiz type, missing count) to 400s
/// with the usual error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            AppError::ValidationError(err.to_string()).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(quiz_form)
        .service(generate_quiz)
        .service(preview_prompt)
        .service(quiz_schema)
        .service(health_check);
}
