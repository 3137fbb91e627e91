use domain::{Hackathon, User};
use std::fmt::Write;
use tracing::warn;

use crate::api::ApiClient;
use crate::transport::HttpTransport;

pub const NOT_FOUND_MESSAGE: &str = "User not found.";
pub const FAILED_MESSAGE: &str = "Something went wrong.";

/// State of the read-only public profile page.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicProfileView {
    Loading,
    Loaded {
        user: User,
        hackathons: Vec<Hackathon>,
    },
    NotFound,
    Failed,
}

impl PublicProfileView {
    pub async fn load<T: HttpTransport>(api: &ApiClient<T>, username: &str) -> Self {
        match api.get_public_profile(username).await {
            Ok(profile) => match profile.found_user() {
                Some(user) => Self::Loaded {
                    user: user.clone(),
                    hackathons: profile.hackathons.clone(),
                },
                None => Self::NotFound,
            },
            Err(e) => {
                warn!(username, "Failed to load public profile: {}", e);
                Self::Failed
            }
        }
    }

    /// Message shown in place of the profile, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading..."),
            Self::Loaded { .. } => None,
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Failed => Some(FAILED_MESSAGE),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Loaded { user, hackathons } => render_public_profile(user, hackathons),
            other => other.message().unwrap_or_default().to_string(),
        }
    }
}

pub fn render_public_profile(user: &User, hackathons: &[Hackathon]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}'s Public Profile", user.username);
    let _ = writeln!(out, "Email: {}", user.email);
    let _ = writeln!(
        out,
        "Bio: {}",
        user.bio
            .as_deref()
            .filter(|bio| !bio.trim().is_empty())
            .unwrap_or("This user hasn't written a bio yet.")
    );
    if let Some(github) = &user.github_link {
        let _ = writeln!(out, "GitHub: {}", github);
    }
    if let Some(linkedin) = &user.linkedin_link {
        let _ = writeln!(out, "LinkedIn: {}", linkedin);
    }

    out.push('\n');
    if hackathons.is_empty() {
        out.push_str("No hackathons found.");
        return out;
    }

    out.push_str("Hackathon Submissions:");
    for h in hackathons {
        let _ = write!(out, "\n- {} [{}]", h.hack_name, h.status);
        if let Some(org) = &h.organization {
            let _ = write!(out, "\n  {}", org);
        }
        if let Some(description) = &h.description {
            let _ = write!(out, "\n  {}", description);
        }
        if !h.tech_stack.is_empty() {
            let _ = write!(out, "\n  Tech Used: {}", h.tech_stack.as_slice().join(", "));
        }
        if let Some(project) = &h.project_link {
            let _ = write!(out, "\n  Project: {}", project);
        }
    }
    out
}

/// Shareable address of a user's public profile page.
pub fn public_profile_url(origin: &str, username: &str) -> String {
    format!("{}/profile/{}/full", origin.trim_end_matches('/'), username)
}
