use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TechStack;
use super::dates::{calendar_date, optional_calendar_date};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HackathonStatus {
    #[default]
    Applied,
    Accepted,
    Rejected,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl HackathonStatus {
    pub const ALL: [Self; 5] = [
        Self::Applied,
        Self::Accepted,
        Self::Rejected,
        Self::InProgress,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HackathonStatus {
    type Err = String;

    /// Case-insensitive; `in progress`, `in-progress` and `in_progress` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown status '{}'. Expected one of: Applied, Accepted, Rejected, In Progress, Completed",
                    s
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamType {
    #[default]
    Solo,
    Team,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Team => "Team",
        }
    }
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solo" => Ok(Self::Solo),
            "team" => Ok(Self::Team),
            _ => Err(format!("Unknown team type '{}'. Expected Solo or Team", s)),
        }
    }
}

/// One hackathon participation, as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    /// Server-assigned identifier; absent until the record is persisted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub hack_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub official_link: String,
    #[serde(with = "calendar_date")]
    pub applied_date: NaiveDate,
    #[serde(with = "calendar_date")]
    pub last_date_to_apply: NaiveDate,
    #[serde(
        default,
        with = "optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_date_to_submit: Option<NaiveDate>,
    #[serde(default)]
    pub status: HackathonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub team_type: TeamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Hackathon {
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Whether both values refer to the same persisted record.
    pub fn same_record(&self, other: &Hackathon) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }
}
