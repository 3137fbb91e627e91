pub mod auth;
pub mod hackathon;
pub mod profile;

pub use auth::{LoginRequest, RegisterRequest};
pub use hackathon::{HackathonDraft, HackathonPatch, NewHackathon};
pub use profile::{PublicProfile, UpdateProfileRequest};

pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Accepts blank input or an absolute URL.
pub(crate) fn validate_optional_url(value: &str) -> Result<(), validator::ValidationError> {
    use validator::ValidateUrl;

    let trimmed = value.trim().to_string();
    if trimmed.is_empty() || trimmed.validate_url() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("url");
        error.message = Some("Must be a valid URL".into());
        Err(error)
    }
}
