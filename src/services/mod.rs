pub mod completion_client;
pub mod prompt_builder;
pub mod prompt_template;
pub mod quiz_service;
pub mod schema_descriptor;
