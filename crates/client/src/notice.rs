use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A dismissable notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
        };
        match &self.description {
            Some(description) => write!(f, "{} {}: {}", marker, self.title, description),
            None => write!(f, "{} {}", marker, self.title),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
    }

    pub fn dismiss(&mut self, index: usize) -> Option<Notice> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.items)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let mut notices = Notices::default();
        notices.push(Notice::success("Saved"));
        notices.push(Notice::error("Error", "boom"));

        let dismissed = notices.dismiss(0).unwrap();
        assert_eq!(dismissed.title, "Saved");
        assert_eq!(notices.len(), 1);
        assert!(notices.dismiss(5).is_none());
        assert!(notices.last().unwrap().is_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(Notice::error("Error", "boom").to_string(), "✗ Error: boom");
        assert_eq!(Notice::success("Saved").to_string(), "✓ Saved");
    }
}
