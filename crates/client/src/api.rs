use domain::dto::{
    HackathonPatch, LoginRequest, NewHackathon, PublicProfile, RegisterRequest,
    UpdateProfileRequest,
};
use domain::{AuthResponse, Hackathon, User};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::response::{decode, normalize};
use crate::session::{FileCredentials, Session};
use crate::transport::{ApiRequest, HttpTransport, ReqwestTransport};

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct HackathonEnvelope {
    hackathon: Hackathon,
}

#[derive(Deserialize)]
struct HackathonListEnvelope {
    #[serde(default)]
    data: Option<Vec<Hackathon>>,
}

/// Typed operations against the HackTracker service.
///
/// Every call is a single independent exchange: no retries, no timeout, no
/// caching. Authenticated calls carry the session's bearer token when there is
/// one; without it the request goes out bare and the service decides.
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    session: Session,
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.api_base_url)?;
        let session = Session::restore(FileCredentials::new(&config.credentials_path))?;
        Ok(Self::new(transport, session))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn register(&mut self, request: &RegisterRequest) -> Result<AuthResponse> {
        let body = serde_json::to_value(request)?;
        let value = self.exchange(ApiRequest::post("/auth/register", body)).await?;
        let auth: AuthResponse = decode(value)?;
        self.session.start(&auth)?;
        Ok(auth)
    }

    pub async fn login(&mut self, request: &LoginRequest) -> Result<AuthResponse> {
        let body = serde_json::to_value(request)?;
        let value = self.exchange(ApiRequest::post("/auth/login", body)).await?;
        let auth: AuthResponse = decode(value)?;
        self.session.start(&auth)?;
        Ok(auth)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.end()
    }

    pub async fn update_profile(&mut self, request: &UpdateProfileRequest) -> Result<User> {
        let body = serde_json::to_value(request)?;
        let request = self.authenticated(ApiRequest::put("/auth/update-profile", body));
        let envelope: UserEnvelope = decode(self.exchange(request).await?)?;
        self.session.set_user(envelope.user.clone());
        Ok(envelope.user)
    }

    /// Fetches `{user, hackathons, profile}` for a public profile page.
    ///
    /// Unlike the authenticated calls, any non-2xx status fails with a generic
    /// message regardless of the body.
    pub async fn get_public_profile(&self, username: &str) -> Result<PublicProfile> {
        self.fetch_public(username, "profile").await
    }

    /// Reads the `hackathons` field of the same public profile body.
    pub async fn get_public_hackathons(&self, username: &str) -> Result<Vec<Hackathon>> {
        Ok(self.fetch_public(username, "hackathons").await?.hackathons)
    }

    pub async fn get_hackathons(&self) -> Result<Vec<Hackathon>> {
        let request = self.authenticated(ApiRequest::get("/hackathons"));
        let envelope: HackathonListEnvelope = decode(self.exchange(request).await?)?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn create_hackathon(&self, hackathon: &NewHackathon) -> Result<Hackathon> {
        let body = serde_json::to_value(hackathon)?;
        let request = self.authenticated(ApiRequest::post("/hackathons", body));
        let envelope: HackathonEnvelope = decode(self.exchange(request).await?)?;
        info!(
            id = ?envelope.hackathon.id,
            name = %envelope.hackathon.hack_name,
            "Hackathon created"
        );
        Ok(envelope.hackathon)
    }

    pub async fn update_hackathon(&self, id: &str, patch: &HackathonPatch) -> Result<Hackathon> {
        let body = serde_json::to_value(patch)?;
        let path = format!("/hackathons/update/{}", urlencoding::encode(id));
        let request = self.authenticated(ApiRequest::put(path, body));
        let envelope: HackathonEnvelope = decode(self.exchange(request).await?)?;
        info!(id, "Hackathon updated");
        Ok(envelope.hackathon)
    }

    fn authenticated(&self, request: ApiRequest) -> ApiRequest {
        request.with_bearer(self.session.token().map(str::to_owned))
    }

    async fn exchange(&self, request: ApiRequest) -> Result<Value> {
        debug!(
            method = %request.method,
            path = %request.path,
            authenticated = request.bearer.is_some(),
            "Sending request"
        );
        let response = self.transport.send(request).await?;
        debug!(status = response.status, "Received response");
        normalize(response)
    }

    async fn fetch_public(&self, username: &str, what: &str) -> Result<PublicProfile> {
        let path = format!("/profile/{}/full", urlencoding::encode(username));
        debug!(path = %path, "Fetching public profile");

        let response = self.transport.send(ApiRequest::get(path)).await?;
        if !response.is_success() {
            return Err(ApiError::FetchFailed(format!(
                "Failed to fetch {} for {}",
                what, username
            )));
        }

        let value: Value =
            serde_json::from_str(&response.body).map_err(|_| ApiError::InvalidResponse)?;
        decode(value)
    }
}
