use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::{AppError, AppResult};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([a-z_]+)\}").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// A prompt with `{name}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    version: String,
    text: String,
    placeholders: BTreeSet<String>,
}

impl PromptTemplate {
    pub fn new(version: impl Into<String>, text: impl Into<String>) -> AppResult<Self> {
        let text = text.into();
        let placeholders: BTreeSet<String> = PLACEHOLDER_REGEX
            .captures_iter(&text)
            .map(|caps| caps[1].to_string())
            .collect();

        if placeholders.is_empty() {
            return Err(AppError::InternalError(
                "Prompt template declares no placeholders".to_string(),
            ));
        }

        Ok(Self {
            version: version.into(),
            text,
            placeholders,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn placeholders(&self) -> &BTreeSet<String> {
        &self.placeholders
    }

    /// Substitutes every placeholder in a single pass. Inserted values are
    /// not scanned again.
    pub fn format(&self, values: &HashMap<&str, String>) -> AppResult<String> {
        if let Some(missing) = self
            .placeholders
            .iter()
            .find(|name| !values.contains_key(name.as_str()))
        {
            return Err(AppError::InternalError(format!(
                "No value supplied for placeholder '{}' in template {}",
                missing, self.version
            )));
        }

        let rendered = PLACEHOLDER_REGEX.replace_all(&self.text, |caps: &Captures| {
            values
                .get(&caps[1])
                .cloned()
                .unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_placeholders() {
        let template = PromptTemplate::new("t1", "Hello {name}, meet {other} and {name}").unwrap();
        let names: Vec<&str> = template.placeholders().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["name", "other"]);
        assert_eq!(template.version(), "t1");
    }

    #[test]
    fn rejects_template_without_placeholders() {
        let result = PromptTemplate::new("t1", "nothing to fill");
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn ignores_non_placeholder_braces() {
        let template = PromptTemplate::new("t1", r#"{"foo": 1} and {Name} and {x}"#).unwrap();
        let names: Vec<&str> = template.placeholders().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["x"]);
    }

    #[test]
    fn substitutes_all_occurrences() {
        let template = PromptTemplate::new("t1", "{a}-{b}-{a}").unwrap();
        let values = HashMap::from([("a", "1".to_string()), ("b", "2".to_string())]);
        assert_eq!(template.format(&values).unwrap(), "1-2-1");
    }

    #[test]
    fn missing_value_is_an_error() {
        let template = PromptTemplate::new("t1", "{a} {b}").unwrap();
        let values = HashMap::from([("a", "1".to_string())]);
        let err = template.format(&values).unwrap_err();
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn values_are_not_rescanned() {
        let template = PromptTemplate::new("t1", "{a} {b}").unwrap();
        let values = HashMap::from([("a", "{b}".to_string()), ("b", "x".to_string())]);
        assert_eq!(template.format(&values).unwrap(), "{b} x");
    }

    #[test]
    fn empty_value_substitutes_empty_string() {
        let template = PromptTemplate::new("t1", "[{a}]").unwrap();
        let values = HashMap::from([("a", String::new())]);
        assert_eq!(template.format(&values).unwrap(), "[]");
    }
}
