use domain::dto::{HackathonPatch, NewHackathon};
use domain::Hackathon;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::Result;
use crate::notice::{Notice, Notices};
use crate::transport::HttpTransport;

/// The signed-in user's hackathon list and the state of its edit form.
///
/// After a successful create the whole list is reloaded from the service; after
/// an update the returned record is swapped into place by id with no further
/// request. A failed submission never touches the list.
#[derive(Debug, Default)]
pub struct Dashboard {
    hackathons: Vec<Hackathon>,
    editing: Option<Hackathon>,
    form_open: bool,
    is_loading: bool,
    notices: Notices,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hackathons(&self) -> &[Hackathon] {
        &self.hackathons
    }

    pub fn find(&self, id: &str) -> Option<&Hackathon> {
        self.hackathons
            .iter()
            .find(|h| h.id.as_deref() == Some(id))
    }

    pub fn editing(&self) -> Option<&Hackathon> {
        self.editing.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub fn open_new_form(&mut self) {
        self.editing = None;
        self.form_open = true;
    }

    pub fn begin_edit(&mut self, hackathon: Hackathon) {
        self.editing = Some(hackathon);
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.editing = None;
    }

    /// Replaces the list with the service's copy. On failure the current list
    /// is kept and an error notice is raised.
    pub async fn load<T: HttpTransport>(&mut self, api: &ApiClient<T>) -> Result<()> {
        self.is_loading = true;
        let result = api.get_hackathons().await;
        self.is_loading = false;

        match result {
            Ok(hackathons) => {
                debug!(count = hackathons.len(), "Hackathons loaded");
                self.hackathons = hackathons;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load hackathons: {}", e);
                self.notices.push(Notice::error("Error", e.to_string()));
                Err(e)
            }
        }
    }

    /// Submits the form payload: an update when a persisted record is being
    /// edited, a create otherwise. The form is closed and the selection
    /// cleared whatever the outcome; errors go back to the caller.
    pub async fn submit<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        payload: NewHackathon,
    ) -> Result<Hackathon> {
        let editing_id = self.editing.as_ref().and_then(|h| h.id.clone());

        let outcome = match editing_id {
            Some(id) => self.apply_update(api, &id, payload.into()).await,
            None => self.apply_create(api, payload).await,
        };

        self.close_form();
        outcome
    }

    async fn apply_create<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        payload: NewHackathon,
    ) -> Result<Hackathon> {
        let created = api.create_hackathon(&payload).await?;

        if self.load(api).await.is_err() {
            warn!("Hackathon created but the list could not be reloaded");
        }

        Ok(created)
    }

    async fn apply_update<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        id: &str,
        patch: HackathonPatch,
    ) -> Result<Hackathon> {
        // Decoding runs the tech stack through the normalizer, so the record
        // can go into the list as returned.
        let updated = api.update_hackathon(id, &patch).await?;

        let mut replaced = 0;
        for slot in self.hackathons.iter_mut().filter(|h| h.same_record(&updated)) {
            *slot = updated.clone();
            replaced += 1;
        }
        info!(id, replaced, "Applied update to local list");

        Ok(updated)
    }
}
