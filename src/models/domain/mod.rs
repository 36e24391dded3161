pub mod quiz;
pub mod quiz_question;
pub mod quiz_type;
pub use quiz::Quiz;
pub use quiz_question::ObjectiveQuestion;
pub use quiz_type::QuizType;
