use std::collections::HashMap;

use serde::Deserialize;

/// Failure modes of a gateway call.
///
/// `Unauthorized` is surfaced as its own variant so the session layer can
/// treat any 401 as a forced logout from a single place.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Structured body of a 422 response: an optional top-level message plus
/// per-field message lists, e.g. `{"errors": {"image": ["The image field is
/// required."]}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldErrors {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    /// First message reported for a named field, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors.get(field)?.first().map(String::as_str)
    }

    fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "invalid fields: {}", self.field_names().join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_laravel_style_error_body() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "image": ["The image field is required.", "second"],
                "price": ["The price must be a number."]
            }
        }"#;

        let errors: FieldErrors = serde_json::from_str(body).unwrap();
        assert_eq!(errors.first("image"), Some("The image field is required."));
        assert_eq!(errors.first("price"), Some("The price must be a number."));
        assert_eq!(errors.first("name"), None);
        assert_eq!(errors.to_string(), "The given data was invalid.");
    }

    #[test]
    fn tolerates_missing_sections() {
        let errors: FieldErrors = serde_json::from_str("{}").unwrap();
        assert_eq!(errors.message, None);
        assert_eq!(errors.first("image"), None);
    }
}
