use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {}", validation_messages(.0).join(", "))]
    Validation(#[from] ValidationErrors),

    #[error("Invalid date for {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Flattens validation errors into `field: message` lines, sorted by field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                format!(
                    "{}: {}",
                    field,
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                )
            })
        })
        .collect();
    messages.sort();
    messages
}
