use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use super::{non_blank, validate_optional_url};
use crate::models::dates::{
    DATE_FORMAT, calendar_date, clearable_calendar_date, optional_calendar_date,
    parse_calendar_date,
};
use crate::models::{Hackathon, HackathonStatus, TeamType, TechStack};
use crate::{DomainError, Result};

/// Request payload for `POST /hackathons`: a hackathon without the
/// server-assigned identifier and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHackathon {
    pub hack_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub official_link: String,
    #[serde(with = "calendar_date")]
    pub applied_date: NaiveDate,
    #[serde(with = "calendar_date")]
    pub last_date_to_apply: NaiveDate,
    #[serde(
        with = "optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_date_to_submit: Option<NaiveDate>,
    pub status: HackathonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    pub team_type: TeamType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tech_stack: TechStack,
}

/// Request payload for `PUT /hackathons/update/{id}`. Only the fields that are
/// set are sent; the service keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_link: Option<String>,
    #[serde(
        with = "optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub applied_date: Option<NaiveDate>,
    #[serde(
        with = "optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_date_to_apply: Option<NaiveDate>,
    /// `Some(None)` clears the stored submission deadline.
    #[serde(
        serialize_with = "clearable_calendar_date::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_date_to_submit: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HackathonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_type: Option<TeamType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<TechStack>,
}

impl HackathonPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Editing the whole record resends every field. Optional fields that were
/// cleared, the submission deadline included, go out as empty strings so the
/// stored value is overwritten.
impl From<NewHackathon> for HackathonPatch {
    fn from(new: NewHackathon) -> Self {
        Self {
            hack_name: Some(new.hack_name),
            organization: Some(new.organization.unwrap_or_default()),
            official_link: Some(new.official_link),
            applied_date: Some(new.applied_date),
            last_date_to_apply: Some(new.last_date_to_apply),
            last_date_to_submit: Some(new.last_date_to_submit),
            status: Some(new.status),
            project_link: Some(new.project_link.unwrap_or_default()),
            github_link: Some(new.github_link.unwrap_or_default()),
            certificate_url: Some(new.certificate_url.unwrap_or_default()),
            team_type: Some(new.team_type),
            description: Some(new.description.unwrap_or_default()),
            tech_stack: Some(new.tech_stack),
        }
    }
}

/// Raw form state for adding or editing a hackathon. Every field holds the
/// text as typed; dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct HackathonDraft {
    #[validate(length(min = 1, message = "Hackathon name is required"))]
    pub hack_name: String,

    pub organization: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub official_link: String,

    #[validate(length(min = 1, message = "Applied date is required"))]
    pub applied_date: String,

    #[validate(length(min = 1, message = "Application deadline is required"))]
    pub last_date_to_apply: String,

    pub last_date_to_submit: String,

    pub status: HackathonStatus,

    #[validate(custom(function = "validate_optional_url"))]
    pub project_link: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub github_link: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub certificate_url: String,

    pub team_type: TeamType,

    pub description: String,
}

impl HackathonDraft {
    /// Prefills the form from an existing record.
    pub fn from_hackathon(hackathon: &Hackathon) -> Self {
        let format_date = |date: NaiveDate| date.format(DATE_FORMAT).to_string();

        Self {
            hack_name: hackathon.hack_name.clone(),
            organization: hackathon.organization.clone().unwrap_or_default(),
            official_link: hackathon.official_link.clone(),
            applied_date: format_date(hackathon.applied_date),
            last_date_to_apply: format_date(hackathon.last_date_to_apply),
            last_date_to_submit: hackathon
                .last_date_to_submit
                .map(format_date)
                .unwrap_or_default(),
            status: hackathon.status,
            project_link: hackathon.project_link.clone().unwrap_or_default(),
            github_link: hackathon.github_link.clone().unwrap_or_default(),
            certificate_url: hackathon.certificate_url.clone().unwrap_or_default(),
            team_type: hackathon.team_type,
            description: hackathon.description.clone().unwrap_or_default(),
        }
    }

    /// Validates the draft and builds the submission payload. Blank optional
    /// fields are omitted.
    pub fn to_new_hackathon(&self, tech_stack: &TechStack) -> Result<NewHackathon> {
        self.validate()?;

        let last_date_to_submit = match non_blank(&self.last_date_to_submit) {
            Some(raw) => Some(parse_date("lastDateToSubmit", &raw)?),
            None => None,
        };

        Ok(NewHackathon {
            hack_name: self.hack_name.trim().to_string(),
            organization: non_blank(&self.organization),
            official_link: self.official_link.trim().to_string(),
            applied_date: parse_date("appliedDate", &self.applied_date)?,
            last_date_to_apply: parse_date("lastDateToApply", &self.last_date_to_apply)?,
            last_date_to_submit,
            status: self.status,
            project_link: non_blank(&self.project_link),
            github_link: non_blank(&self.github_link),
            certificate_url: non_blank(&self.certificate_url),
            team_type: self.team_type,
            description: non_blank(&self.description),
            tech_stack: tech_stack.clone(),
        })
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    parse_calendar_date(raw).ok_or_else(|| DomainError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}
