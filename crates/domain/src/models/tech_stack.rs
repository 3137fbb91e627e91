use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The shapes a hackathon's tech stack can arrive in.
///
/// The service usually answers with a JSON array, but records that went through
/// older clients (or hand-edited files) may carry one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechStackInput {
    List(Vec<String>),
    Delimited(String),
    Absent,
}

impl From<Value> for TechStackInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::String(text) => Self::Delimited(text),
            _ => Self::Absent,
        }
    }
}

impl From<Option<Value>> for TechStackInput {
    fn from(value: Option<Value>) -> Self {
        value.map(Self::from).unwrap_or(Self::Absent)
    }
}

/// Reconciles the list and delimited-string representations into a list.
///
/// Lists pass through untouched. Strings are split on `,` and every segment is
/// trimmed; interior empty segments (`"a,,b"`) are kept as empty entries, but a
/// string that is blank overall yields no entries at all.
pub fn normalize_tech_stack(input: TechStackInput) -> Vec<String> {
    match input {
        TechStackInput::List(items) => items,
        TechStackInput::Delimited(text) if text.trim().is_empty() => Vec::new(),
        TechStackInput::Delimited(text) => {
            text.split(',').map(|segment| segment.trim().to_string()).collect()
        }
        TechStackInput::Absent => Vec::new(),
    }
}

/// Ordered list of technology names attached to a hackathon.
///
/// Deserialization goes through [`normalize_tech_stack`], so a decoded record
/// always holds a list no matter which representation the source used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TechStack(Vec<String>);

impl TechStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(input: TechStackInput) -> Self {
        Self(normalize_tech_stack(input))
    }

    /// Adds an entry typed by the user. Blank input and entries already present
    /// are ignored; returns whether the stack changed.
    pub fn add(&mut self, entry: &str) -> bool {
        let trimmed = entry.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.0.push(trimmed.to_string());
        true
    }

    pub fn remove(&mut self, entry: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != entry);
        self.0.len() != before
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.0.iter().any(|existing| existing == entry)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TechStack {
    fn from(items: Vec<String>) -> Self {
        Self::from_input(TechStackInput::List(items))
    }
}

impl From<&str> for TechStack {
    fn from(text: &str) -> Self {
        Self::from_input(TechStackInput::Delimited(text.to_string()))
    }
}

impl<'a> IntoIterator for &'a TechStack {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TechStack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(Self::from_input(TechStackInput::from(raw)))
    }
}
