use chrono::NaiveDate;
use domain::Hackathon;
use std::fmt;

const TECH_PREVIEW: usize = 3;

/// How close an application deadline is, relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineState {
    Open,
    /// Due within the next seven days.
    Near,
    /// Today or already past.
    Overdue,
}

impl DeadlineState {
    pub fn of(deadline: NaiveDate, today: NaiveDate) -> Self {
        let days_left = (deadline - today).num_days();
        if days_left <= 0 {
            Self::Overdue
        } else if days_left <= 7 {
            Self::Near
        } else {
            Self::Open
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Text rendering of one hackathon for the dashboard list.
pub struct HackathonCard<'a> {
    hackathon: &'a Hackathon,
    today: NaiveDate,
}

impl<'a> HackathonCard<'a> {
    pub fn new(hackathon: &'a Hackathon, today: NaiveDate) -> Self {
        Self { hackathon, today }
    }

    pub fn deadline(&self) -> DeadlineState {
        DeadlineState::of(self.hackathon.last_date_to_apply, self.today)
    }

    /// Up to three entries, plus a `+N more` marker when the stack is longer.
    pub fn tech_preview(&self) -> Vec<String> {
        let stack = self.hackathon.tech_stack.as_slice();
        let mut preview: Vec<String> = stack.iter().take(TECH_PREVIEW).cloned().collect();
        if stack.len() > TECH_PREVIEW {
            preview.push(format!("+{} more", stack.len() - TECH_PREVIEW));
        }
        preview
    }
}

impl fmt::Display for HackathonCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.hackathon;

        write!(f, "{} [{}]", h.hack_name, h.status)?;
        if let Some(id) = &h.id {
            write!(f, " ({})", id)?;
        }
        writeln!(f)?;
        if let Some(org) = &h.organization {
            writeln!(f, "  {}", org)?;
        }

        let marker = match self.deadline() {
            DeadlineState::Open => "",
            DeadlineState::Near => " (closing soon)",
            DeadlineState::Overdue => " (closed)",
        };
        writeln!(
            f,
            "  {} | Apply by: {}{}",
            h.team_type,
            format_date(h.last_date_to_apply),
            marker
        )?;

        if let Some(description) = &h.description {
            writeln!(f, "  {}", description)?;
        }
        let preview = self.tech_preview();
        if !preview.is_empty() {
            writeln!(f, "  Tech: {}", preview.join(", "))?;
        }
        writeln!(f, "  Link: {}", h.official_link)?;
        if let Some(github) = &h.github_link {
            writeln!(f, "  GitHub: {}", github)?;
        }
        write!(f, "  Applied on: {}", format_date(h.applied_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::TechStack;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hackathon(stack: &str) -> Hackathon {
        serde_json::from_value(serde_json::json!({
            "_id": "h1",
            "hackName": "MLH Hack",
            "organization": "MLH",
            "officialLink": "https://mlh.io",
            "appliedDate": "2025-01-05",
            "lastDateToApply": "2025-01-20",
            "techStack": TechStack::from(stack),
        }))
        .unwrap()
    }

    #[rstest]
    #[case::past(date(2025, 1, 10), DeadlineState::Overdue)]
    #[case::today(date(2025, 1, 20), DeadlineState::Overdue)]
    #[case::tomorrow(date(2025, 1, 21), DeadlineState::Near)]
    #[case::one_week(date(2025, 1, 27), DeadlineState::Near)]
    #[case::eight_days(date(2025, 1, 28), DeadlineState::Open)]
    fn test_deadline_state(#[case] deadline: NaiveDate, #[case] expected: DeadlineState) {
        assert_eq!(DeadlineState::of(deadline, date(2025, 1, 20)), expected);
    }

    #[test]
    fn test_tech_preview_caps_at_three() {
        let h = hackathon("Rust, Tokio, Axum, SQLx, Serde");
        let card = HackathonCard::new(&h, date(2025, 1, 1));
        assert_eq!(card.tech_preview(), ["Rust", "Tokio", "Axum", "+2 more"]);
    }

    #[test]
    fn test_render() {
        let h = hackathon("Rust");
        let rendered = HackathonCard::new(&h, date(2025, 1, 15)).to_string();

        assert!(rendered.starts_with("MLH Hack [Applied] (h1)"));
        assert!(rendered.contains("Solo | Apply by: Jan 20, 2025 (closing soon)"));
        assert!(rendered.contains("Tech: Rust"));
        assert!(rendered.ends_with("Applied on: Jan 5, 2025"));
    }
}
