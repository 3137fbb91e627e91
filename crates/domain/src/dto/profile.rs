use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::non_blank;
use crate::models::{Hackathon, User};

/// Request payload for `PUT /auth/update-profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Must be a valid email"))]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[validate(url(message = "Must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    #[validate(url(message = "Must be a valid URL"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,
}

impl UpdateProfileRequest {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            github_link: user.github_link.clone(),
            linkedin_link: user.linkedin_link.clone(),
        }
    }

    /// Blank optional fields are dropped instead of being sent as empty strings.
    pub fn normalized(mut self) -> Self {
        self.username = self.username.trim().to_string();
        self.email = self.email.trim().to_string();
        self.bio = self.bio.as_deref().and_then(non_blank);
        self.github_link = self.github_link.as_deref().and_then(non_blank);
        self.linkedin_link = self.linkedin_link.as_deref().and_then(non_blank);
        self
    }
}

/// Body of `GET /profile/{username}/full`.
///
/// `user` is `null` when no such user exists. `profile` is passed through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublicProfile {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hackathons: Vec<Hackathon>,
    #[serde(default)]
    pub profile: Option<Value>,
}

impl PublicProfile {
    /// The user, if the service returned one with a usable username.
    pub fn found_user(&self) -> Option<&User> {
        self.user
            .as_ref()
            .filter(|user| !user.username.trim().is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Hackathon>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Hackathon>>::deserialize(deserializer)?.unwrap_or_default())
}
