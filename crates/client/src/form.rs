use domain::dto::{HackathonDraft, UpdateProfileRequest};
use domain::{Hackathon, TechStack, User};
use tracing::{debug, warn};
use validator::Validate;

use crate::api::ApiClient;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::notice::{Notice, Notices};
use crate::transport::HttpTransport;

/// Add/edit form for a single hackathon.
#[derive(Debug, Clone, Default)]
pub struct HackathonForm {
    draft: HackathonDraft,
    tech_stack: TechStack,
    editing: bool,
    submitting: bool,
}

impl HackathonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_hackathon(hackathon: &Hackathon) -> Self {
        Self {
            draft: HackathonDraft::from_hackathon(hackathon),
            tech_stack: hackathon.tech_stack.clone(),
            editing: true,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &HackathonDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut HackathonDraft {
        &mut self.draft
    }

    pub fn tech_stack(&self) -> &TechStack {
        &self.tech_stack
    }

    pub fn add_tech(&mut self, entry: &str) -> bool {
        self.tech_stack.add(entry)
    }

    pub fn remove_tech(&mut self, entry: &str) -> bool {
        self.tech_stack.remove(entry)
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            "Edit Hackathon"
        } else {
            "Add New Hackathon"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.submitting, self.editing) {
            (true, _) => "Saving...",
            (false, true) => "Update",
            (false, false) => "Add Hackathon",
        }
    }

    /// Validates the draft and hands it to the dashboard.
    ///
    /// Returns `Ok(None)` without doing anything while a previous submission
    /// is still outstanding. Every failure is raised as an error notice on the
    /// dashboard and returned; on success the form is reset.
    pub async fn submit<T: HttpTransport>(
        &mut self,
        dashboard: &mut Dashboard,
        api: &ApiClient<T>,
    ) -> Result<Option<Hackathon>> {
        if self.submitting {
            debug!("Submission already in flight, ignoring");
            return Ok(None);
        }

        let payload = match self.draft.to_new_hackathon(&self.tech_stack) {
            Ok(payload) => payload,
            Err(e) => {
                dashboard
                    .notices_mut()
                    .push(Notice::error("Error", e.to_string()));
                return Err(e.into());
            }
        };

        let updating = dashboard.editing().is_some_and(Hackathon::is_persisted);

        self.submitting = true;
        let result = dashboard.submit(api, payload).await;
        self.submitting = false;

        match result {
            Ok(hackathon) => {
                let message = if updating {
                    "Hackathon updated successfully!"
                } else {
                    "Hackathon added successfully!"
                };
                dashboard
                    .notices_mut()
                    .push(Notice::success("Success").with_description(message));
                self.reset();
                Ok(Some(hackathon))
            }
            Err(e) => {
                warn!("Hackathon submission failed: {}", e);
                dashboard
                    .notices_mut()
                    .push(Notice::error("Error", e.to_string()));
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.draft = HackathonDraft::default();
        self.tech_stack = TechStack::new();
        self.editing = false;
    }
}

/// Profile editing form, prefilled from the signed-in user.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    request: UpdateProfileRequest,
    submitting: bool,
}

impl ProfileForm {
    pub fn new(request: UpdateProfileRequest) -> Self {
        Self {
            request,
            submitting: false,
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self::new(UpdateProfileRequest::from_user(user))
    }

    pub fn request_mut(&mut self) -> &mut UpdateProfileRequest {
        &mut self.request
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit<T: HttpTransport>(
        &mut self,
        api: &mut ApiClient<T>,
        notices: &mut Notices,
    ) -> Result<User> {
        let request = self.request.clone().normalized();
        if let Err(e) = request.validate() {
            notices.push(Notice::error(
                "Update failed",
                domain::error::validation_messages(&e).join(", "),
            ));
            return Err(e.into());
        }

        self.submitting = true;
        let result = api.update_profile(&request).await;
        self.submitting = false;

        match &result {
            Ok(user) => {
                self.request = UpdateProfileRequest::from_user(user);
                notices.push(Notice::success("Profile updated successfully!"));
            }
            Err(e) => {
                warn!("Profile update failed: {}", e);
                notices.push(Notice::error(
                    "Update failed",
                    "Could not update profile. Please try again.",
                ));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryCredentials, Session};
    use crate::testing::{ScriptedTransport, hackathon_json, json_response};
    use domain::HackathonStatus;
    use serde_json::json;

    fn api(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
        let session = Session::restore(MemoryCredentials::with_token("tok")).unwrap();
        ApiClient::new(transport, session)
    }

    fn fill(form: &mut HackathonForm, name: &str) {
        let draft = form.draft_mut();
        draft.hack_name = name.to_string();
        draft.official_link = "https://mlh.io".to_string();
        draft.applied_date = "2025-01-05".to_string();
        draft.last_date_to_apply = "2025-01-20".to_string();
    }

    #[tokio::test]
    async fn test_invalid_draft_is_surfaced_and_not_sent() {
        let api = api(ScriptedTransport::new());
        let mut dashboard = Dashboard::new();
        let mut form = HackathonForm::new();

        let err = form.submit(&mut dashboard, &api).await.unwrap_err();

        assert!(err.to_string().contains("Hackathon name is required"));
        assert_eq!(api.transport().request_count(), 0);
        assert!(dashboard.notices().last().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_add_sends_tech_stack_and_resets() {
        let transport = ScriptedTransport::new()
            .respond(json_response(
                201,
                json!({ "hackathon": hackathon_json("h1", "MLH Hack") }),
            ))
            .respond(json_response(
                200,
                json!({ "data": [hackathon_json("h1", "MLH Hack")] }),
            ));
        let api = api(transport);
        let mut dashboard = Dashboard::new();
        let mut form = HackathonForm::new();
        fill(&mut form, "MLH Hack");
        form.add_tech("Rust");
        form.add_tech("rust ");
        form.add_tech("Rust");

        let created = form.submit(&mut dashboard, &api).await.unwrap();

        assert!(created.is_some());
        let body = api.transport().requests()[0].body.clone().unwrap();
        assert_eq!(body["techStack"], json!(["Rust", "rust"]));
        assert_eq!(form.draft(), &HackathonDraft::default());
        assert!(form.tech_stack().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(
            dashboard.notices().last().unwrap().description.as_deref(),
            Some("Hackathon added successfully!")
        );
    }

    #[tokio::test]
    async fn test_service_error_is_not_swallowed() {
        let transport = ScriptedTransport::new()
            .respond(json_response(400, json!({ "msg": "Official link already tracked" })));
        let api = api(transport);
        let mut dashboard = Dashboard::new();
        let mut form = HackathonForm::new();
        fill(&mut form, "MLH Hack");

        let err = form.submit(&mut dashboard, &api).await.unwrap_err();

        assert_eq!(err.to_string(), "Official link already tracked");
        let notice = dashboard.notices().last().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.description.as_deref(), Some("Official link already tracked"));
        assert_eq!(form.draft().hack_name, "MLH Hack");
    }

    #[tokio::test]
    async fn test_submission_in_flight_is_ignored() {
        let api = api(ScriptedTransport::new());
        let mut dashboard = Dashboard::new();
        let mut form = HackathonForm::new();
        fill(&mut form, "MLH Hack");
        form.submitting = true;

        assert!(form.submit(&mut dashboard, &api).await.unwrap().is_none());
        assert_eq!(api.transport().request_count(), 0);
        assert_eq!(form.submit_label(), "Saving...");
    }

    #[tokio::test]
    async fn test_edit_form_updates_status() {
        let existing: Hackathon =
            serde_json::from_value(hackathon_json("abc123", "MLH Hack")).unwrap();
        let mut updated = hackathon_json("abc123", "MLH Hack");
        updated["status"] = json!("Completed");

        let transport = ScriptedTransport::new()
            .respond(json_response(200, json!({ "data": [hackathon_json("abc123", "MLH Hack")] })))
            .respond(json_response(200, json!({ "hackathon": updated })));
        let api = api(transport);
        let mut dashboard = Dashboard::new();
        dashboard.load(&api).await.unwrap();

        dashboard.begin_edit(existing.clone());
        let mut form = HackathonForm::for_hackathon(&existing);
        assert_eq!(form.title(), "Edit Hackathon");
        assert_eq!(form.tech_stack().as_slice(), ["Rust"]);
        form.draft_mut().status = HackathonStatus::Completed;

        form.submit(&mut dashboard, &api).await.unwrap();

        assert_eq!(
            dashboard.find("abc123").unwrap().status,
            HackathonStatus::Completed
        );
        assert_eq!(api.transport().request_count(), 2);
    }

    #[tokio::test]
    async fn test_clearing_submission_deadline_is_sent() {
        let mut stored = hackathon_json("abc123", "MLH Hack");
        stored["lastDateToSubmit"] = json!("2025-02-01T00:00:00.000Z");
        let existing: Hackathon = serde_json::from_value(stored.clone()).unwrap();
        let mut returned = stored;
        returned["lastDateToSubmit"] = json!(null);

        let transport = ScriptedTransport::new()
            .respond(json_response(200, json!({ "hackathon": returned })));
        let api = api(transport);
        let mut dashboard = Dashboard::new();
        dashboard.begin_edit(existing.clone());

        let mut form = HackathonForm::for_hackathon(&existing);
        assert_eq!(form.draft().last_date_to_submit, "2025-02-01");
        form.draft_mut().last_date_to_submit = String::new();
        form.submit(&mut dashboard, &api).await.unwrap();

        let sent = api.transport().requests();
        assert_eq!(sent[0].path, "/hackathons/update/abc123");
        let body = sent[0].body.clone().unwrap();
        assert_eq!(body["lastDateToSubmit"], json!(""));
        assert_eq!(body["organization"], json!(""));
    }

    #[tokio::test]
    async fn test_form_reused_after_edit_adds() {
        let existing: Hackathon =
            serde_json::from_value(hackathon_json("abc123", "MLH Hack")).unwrap();
        let transport = ScriptedTransport::new()
            .respond(json_response(200, json!({ "hackathon": hackathon_json("abc123", "MLH Hack") })))
            .respond(json_response(201, json!({ "hackathon": hackathon_json("h2", "Next Hack") })))
            .respond(json_response(200, json!({ "data": [hackathon_json("h2", "Next Hack")] })));
        let api = api(transport);
        let mut dashboard = Dashboard::new();

        dashboard.begin_edit(existing.clone());
        let mut form = HackathonForm::for_hackathon(&existing);
        form.submit(&mut dashboard, &api).await.unwrap();
        assert_eq!(
            dashboard.notices().last().unwrap().description.as_deref(),
            Some("Hackathon updated successfully!")
        );

        assert!(!form.is_editing());
        assert_eq!(form.title(), "Add New Hackathon");
        assert_eq!(form.submit_label(), "Add Hackathon");

        fill(&mut form, "Next Hack");
        form.submit(&mut dashboard, &api).await.unwrap();

        let sent = api.transport().requests();
        assert_eq!(sent[1].method, crate::transport::Method::Post);
        assert_eq!(sent[1].path, "/hackathons");
        assert_eq!(
            dashboard.notices().last().unwrap().description.as_deref(),
            Some("Hackathon added successfully!")
        );
    }

    #[tokio::test]
    async fn test_profile_update_notices() {
        let transport = ScriptedTransport::new()
            .respond(json_response(
                200,
                json!({ "user": { "username": "alice", "email": "a@example.com", "bio": "Builder" } }),
            ))
            .respond(json_response(500, json!({ "error": "db down" })));
        let mut api = api(transport);
        let mut notices = Notices::default();

        let user = User {
            username: "alice".to_string(),
            email: "a@example.com".to_string(),
            ..User::default()
        };
        let mut form = ProfileForm::from_user(&user);
        form.request_mut().bio = Some("Builder".to_string());
        form.request_mut().github_link = Some("  ".to_string());

        form.submit(&mut api, &mut notices).await.unwrap();
        assert_eq!(notices.last().unwrap().title, "Profile updated successfully!");
        let body = api.transport().requests()[0].body.clone().unwrap();
        assert!(body.get("githubLink").is_none());

        assert!(form.submit(&mut api, &mut notices).await.is_err());
        let notice = notices.last().unwrap();
        assert_eq!(notice.title, "Update failed");
        assert_eq!(
            notice.description.as_deref(),
            Some("Could not update profile. Please try again.")
        );
    }
}
