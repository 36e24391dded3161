use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum QuizType {
    #[serde(rename = "Multi-Choice")]
    MultiChoice,
    #[serde(rename = "True-False")]
    TrueFalse,
    #[serde(rename = "Open-Ended")]
    OpenEnded,
}

impl QuizType {
    pub const ALL: [QuizType; 3] = [QuizType::MultiChoice, QuizType::TrueFalse, QuizType::OpenEnded];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::MultiChoice => "Multi-Choice",
            QuizType::TrueFalse => "True-False",
            QuizType::OpenEnded => "Open-Ended",
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
