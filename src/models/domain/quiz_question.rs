use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single question. Choices `A`-`D` are only filled for multiple choice
/// and true/false quizzes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ObjectiveQuestion {
    pub question: String,
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub a: Option<String>,
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub b: Option<String>,
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    pub c: Option<String>,
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl ObjectiveQuestion {
    pub fn open(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            a: None,
            b: None,
            c: None,
            d: None,
        }
    }
}
