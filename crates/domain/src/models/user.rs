use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique; doubles as the public profile slug.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_link: Option<String>,
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Returned by register and login. The token is the bearer credential for
/// every later authenticated call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_service_user() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "username": "alice",
            "email": "alice@example.com",
            "githubLink": "https://github.com/alice",
            "__v": 3
        }))
        .unwrap();

        assert_eq!(user.id.as_deref(), Some("u1"));
        assert_eq!(user.github_link.as_deref(), Some("https://github.com/alice"));
        assert_eq!(user.revision, Some(3));
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_auth_response_debug_hides_token() {
        let auth = AuthResponse {
            token: "secret-token".to_string(),
            user: User::default(),
        };
        assert!(!format!("{:?}", auth).contains("secret-token"));
    }
}
