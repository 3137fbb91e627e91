pub mod api;
pub mod card;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod notice;
pub mod profile;
pub mod response;
pub mod session;
pub mod transport;

#[cfg(test)]
mod testing;

pub use api::ApiClient;
pub use card::{DeadlineState, HackathonCard};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{ApiError, Result};
pub use form::{HackathonForm, ProfileForm};
pub use notice::{Notice, NoticeKind, Notices};
pub use profile::{PublicProfileView, public_profile_url};
pub use session::{CredentialStore, FileCredentials, MemoryCredentials, Session};
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, ReqwestTransport};
