pub mod form_page;
pub mod quiz_prompt;
